//! Core simulation module - deterministic multiplayer falling-block engine
//!
//! This crate is the whole game without the parts you can see or hear: block
//! shapes and rotation, the shared board, collision resolution for several
//! simultaneous players, and the per-tick orchestration that turns input
//! events into game state. It has zero dependencies on rendering, audio, or
//! I/O, making it:
//!
//! - **Deterministic**: one `update` per tick, no wall-clock time anywhere
//! - **Testable**: every rule is reachable through plain function calls
//! - **Portable**: drivable from a GUI, a terminal, or a headless test
//!
//! # Module Structure
//!
//! - [`block`]: piece geometry with table-driven rotation
//! - [`board`]: the shared grid of settled, per-player-owned cells
//! - [`physics`]: collision resolution, line-removal cascades, batch drops
//! - [`logic`]: the tick pipeline gluing input, physics, and collaborators
//! - [`factory`]: the seven standard piece shapes
//! - [`rng`]: seeded seven-bag block generation
//! - [`config`]: validated, serializable game setup
//! - [`timer`], [`animation`], [`sound`], [`scoring`]: default
//!   implementations of the pluggable collaborators
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use blockfall_core::{BagBlockFactory, FrameDropTimer, GameConfig, Logic};
//! use blockfall_types::{Command, InputEvent};
//!
//! let mut bag = BagBlockFactory::new(12345);
//! let mut logic = Logic::new(move || bag.create());
//! GameConfig::standard().apply_to(&mut logic).unwrap();
//! logic.set_drop_timer(Rc::new(RefCell::new(FrameDropTimer::default())));
//! logic.start_new_game(2);
//!
//! // One tick: player 0 shifts left, player 1 starts soft-dropping.
//! logic.update(&[
//!     InputEvent::new(0, Command::LeftPressed),
//!     InputEvent::new(1, Command::DownPressed),
//! ]);
//! ```

pub mod animation;
pub mod block;
pub mod board;
pub mod config;
pub mod factory;
pub mod logic;
pub mod physics;
pub mod rng;
pub mod scoring;
pub mod sound;
pub mod timer;

pub use blockfall_input as input;
pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use animation::FlashAnimation;
pub use block::Block;
pub use board::Board;
pub use config::{GameConfig, LayoutConfig};
pub use factory::BlockKind;
pub use logic::{
    BlockFactory, DropTimer, GameSoundPlayer, LineAnimation, Logic, PlayerLines, Scorer,
};
pub use physics::{BlockCollisionObserver, BlockMoveObserver, Physics};
pub use rng::{BagBlockFactory, SimpleRng};
pub use scoring::TeamScorer;
pub use sound::{GameSounds, SoundPlayer};
pub use timer::FrameDropTimer;
