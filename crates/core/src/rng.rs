//! RNG module - deterministic seven-bag block generation
//!
//! A dependency-free LCG plus a bag generator: every run of seven spawns
//! contains each piece kind exactly once, in shuffled order. Seeded, so a
//! driver can replay a game deterministically.

use crate::block::Block;
use crate::factory::BlockKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Seven-bag block generator. Use through a closure as the game's block
/// factory:
///
/// ```
/// use blockfall_core::{BagBlockFactory, Logic};
///
/// let mut bag = BagBlockFactory::new(12345);
/// let logic = Logic::new(move || bag.create());
/// ```
#[derive(Debug, Clone)]
pub struct BagBlockFactory {
    bag: [BlockKind; 7],
    next: usize,
    rng: SimpleRng,
}

impl BagBlockFactory {
    pub fn new(seed: u32) -> Self {
        let mut factory = Self {
            bag: BlockKind::ALL,
            next: 0,
            rng: SimpleRng::new(seed),
        };
        factory.refill_bag();
        factory
    }

    fn refill_bag(&mut self) {
        self.bag = BlockKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.next = 0;
    }

    /// Draw the next block, refilling and reshuffling the bag when empty.
    pub fn create(&mut self) -> Block {
        if self.next >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.next];
        self.next += 1;
        kind.block()
    }
}
