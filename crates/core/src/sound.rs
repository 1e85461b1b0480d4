//! Sound module - coalesces block events into per-tick sound triggers
//!
//! Several blocks can move, collide, or rotate within one tick; playing a
//! sample per event would stack identical sounds. [`SoundPlayer`] latches
//! one flag per category while observing the physics and fires each backend
//! sound at most once when the logic flushes it at the end of the tick.

use crate::logic::GameSoundPlayer;
use crate::physics::{BlockCollisionObserver, BlockMoveObserver};

/// The sample set a sound backend must provide.
pub trait GameSounds {
    fn play_down(&mut self);
    fn play_horizontal(&mut self);
    fn play_rotate(&mut self);
    fn play_collision(&mut self);
    fn play_ground_hit(&mut self);
}

/// Event-coalescing adapter between the engine and a [`GameSounds`] backend.
pub struct SoundPlayer<S: GameSounds> {
    sounds: S,
    down: bool,
    horizontal: bool,
    rotate: bool,
    collision: bool,
    ground: bool,
}

impl<S: GameSounds> SoundPlayer<S> {
    pub fn new(sounds: S) -> Self {
        Self {
            sounds,
            down: false,
            horizontal: false,
            rotate: false,
            collision: false,
            ground: false,
        }
    }
}

impl<S: GameSounds> BlockMoveObserver for SoundPlayer<S> {
    fn block_moved_horizontally(&mut self, _block: usize) {
        self.horizontal = true;
    }

    fn block_moved_down(&mut self, _block: usize) {
        self.down = true;
    }

    fn block_rotated(&mut self, _block: usize) {
        self.rotate = true;
    }
}

impl<S: GameSounds> BlockCollisionObserver for SoundPlayer<S> {
    fn block_hit_left_or_right(&mut self, _block: usize) {
        self.collision = true;
    }

    fn block_hit_other_block(&mut self, _block: usize) {
        self.collision = true;
    }

    fn block_hit_ground(&mut self, _block: usize) {
        self.ground = true;
    }

    fn block_could_not_rotate(&mut self, _block: usize) {
        self.collision = true;
    }

    // block_dragged_down_by_line_removal stays silent: the line-clear sound
    // is the driver's business.
}

impl<S: GameSounds> GameSoundPlayer for SoundPlayer<S> {
    fn play_sounds(&mut self) {
        if self.horizontal {
            self.sounds.play_horizontal();
        }
        if self.down {
            self.sounds.play_down();
        }
        if self.rotate {
            self.sounds.play_rotate();
        }
        if self.collision {
            self.sounds.play_collision();
        }
        if self.ground {
            self.sounds.play_ground_hit();
        }
        self.down = false;
        self.horizontal = false;
        self.rotate = false;
        self.collision = false;
        self.ground = false;
    }
}
