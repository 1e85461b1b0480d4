//! Shared types module - plain data used across the engine
//!
//! These types have no behavior beyond construction and are usable from any
//! context (simulation core, input handling, an external renderer or driver).
//!
//! # Coordinates
//!
//! The board origin (0, 0) is the bottom-left cell and y grows upward, so
//! row 0 is the ground row. Points may leave the board on the y axis: freshly
//! spawned blocks usually start above the top edge and slide into view.
//!
//! # Timing Constants
//!
//! All timing is counted in ticks (one `Logic::update` call). A repeat delay
//! of 0 repeats on every tick, a delay of 1 leaves one tick between repeats,
//! and so on.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_INITIAL_SHIFT_DELAY` | 9 | Held left/right: ticks before the first repeat |
//! | `DEFAULT_FAST_SHIFT_DELAY` | 2 | Held left/right: ticks between later repeats |
//! | `DEFAULT_INITIAL_DROP_DELAY` | 2 | Held down: ticks before the first repeat |
//! | `DEFAULT_FAST_DROP_DELAY` | 1 | Held down: ticks between later repeats |
//! | `DEFAULT_DROP_INTERVAL` | 27 | Gravity: ticks between synchronized drops |
//! | `LINE_FLASH_TICKS` | 15 | Length of the line-clear flash |
//! | `FLASH_TOGGLE_PERIOD` | 3 | Ticks between flash on/off toggles |

use serde::{Deserialize, Serialize};

/// Maximum number of simultaneous players sharing one board.
pub const MAX_PLAYERS: usize = 4;

/// Held left/right: ticks before the first auto-repeat.
pub const DEFAULT_INITIAL_SHIFT_DELAY: i32 = 9;

/// Held left/right: ticks between auto-repeats after the first one.
pub const DEFAULT_FAST_SHIFT_DELAY: i32 = 2;

/// Held down: ticks before the first auto-repeat.
pub const DEFAULT_INITIAL_DROP_DELAY: i32 = 2;

/// Held down: ticks between auto-repeats after the first one.
pub const DEFAULT_FAST_DROP_DELAY: i32 = 1;

/// Ticks between timer-driven synchronized drops.
pub const DEFAULT_DROP_INTERVAL: i32 = 27;

/// How many ticks the line-clear flash runs.
pub const LINE_FLASH_TICKS: i32 = 15;

/// Ticks between on/off toggles while the line-clear flash runs.
pub const FLASH_TOGGLE_PERIOD: i32 = 3;

/// A board coordinate or a coordinate delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: i32,
    pub height: i32,
}

impl BoardSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A settled board cell: `None` is empty, `Some(player)` is owned by the
/// player with that index.
pub type Cell = Option<usize>;

/// The button actions a player can issue.
///
/// `Pause` is reserved for the external driver; the simulation core accepts
/// and ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    DownPressed,
    LeftPressed,
    RightPressed,
    DownReleased,
    LeftReleased,
    RightReleased,
    RotateLeft,
    RotateRight,
    Pause,
}

/// One button action of one player, as delivered to `Logic::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub player: usize,
    pub command: Command,
}

impl InputEvent {
    pub const fn new(player: usize, command: Command) -> Self {
        Self { player, command }
    }
}
