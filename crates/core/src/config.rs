//! Configuration module - validated game setup
//!
//! The engine itself treats misconfiguration as a precondition violation
//! (configured board sizes and start positions are simply indexed). This module
//! is the fallible boundary in front of that: a serde-friendly description
//! of a game setup that a driver can load, validate, and apply before
//! calling `start_new_game`.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use blockfall_types::{
    BoardSize, Point, DEFAULT_DROP_INTERVAL, DEFAULT_FAST_DROP_DELAY, DEFAULT_FAST_SHIFT_DELAY,
    DEFAULT_INITIAL_DROP_DELAY, DEFAULT_INITIAL_SHIFT_DELAY, MAX_PLAYERS,
};

use crate::logic::Logic;

/// Board size and spawn points for one player count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub board_size: BoardSize,
    pub start_positions: Vec<Point>,
}

/// A complete game setup: one layout per supported player count (index 0 is
/// the one-player layout) plus key-repeat and gravity timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub layouts: Vec<LayoutConfig>,
    pub initial_left_right_delay: i32,
    pub fast_left_right_delay: i32,
    pub initial_down_delay: i32,
    pub fast_down_delay: i32,
    /// Ticks between synchronized drops; consumed by the driver's drop
    /// timer, not by `Logic` itself.
    pub drop_interval: i32,
}

impl GameConfig {
    /// The tuned default setup: 10x18 boards for one and two players,
    /// wider boards for three and four.
    pub fn standard() -> Self {
        Self {
            layouts: vec![
                LayoutConfig {
                    board_size: BoardSize::new(10, 18),
                    start_positions: vec![Point::new(5, 16)],
                },
                LayoutConfig {
                    board_size: BoardSize::new(10, 18),
                    start_positions: vec![Point::new(7, 16), Point::new(2, 16)],
                },
                LayoutConfig {
                    board_size: BoardSize::new(13, 18),
                    start_positions: vec![Point::new(6, 16), Point::new(2, 16), Point::new(10, 16)],
                },
                LayoutConfig {
                    board_size: BoardSize::new(16, 18),
                    start_positions: vec![
                        Point::new(10, 16),
                        Point::new(2, 16),
                        Point::new(14, 16),
                        Point::new(6, 16),
                    ],
                },
            ],
            initial_left_right_delay: DEFAULT_INITIAL_SHIFT_DELAY,
            fast_left_right_delay: DEFAULT_FAST_SHIFT_DELAY,
            initial_down_delay: DEFAULT_INITIAL_DROP_DELAY,
            fast_down_delay: DEFAULT_FAST_DROP_DELAY,
            drop_interval: DEFAULT_DROP_INTERVAL,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.layouts.is_empty(), "no player layouts configured");
        ensure!(
            self.layouts.len() <= MAX_PLAYERS,
            "layouts for {} player counts, at most {} supported",
            self.layouts.len(),
            MAX_PLAYERS
        );
        for (index, layout) in self.layouts.iter().enumerate() {
            let players = index + 1;
            let size = layout.board_size;
            ensure!(
                size.width > 0 && size.height > 0,
                "{players}-player board size {}x{} is empty",
                size.width,
                size.height
            );
            ensure!(
                layout.start_positions.len() == players,
                "{players}-player layout has {} start positions",
                layout.start_positions.len()
            );
            for start in &layout.start_positions {
                ensure!(
                    start.x >= 0 && start.x < size.width,
                    "{players}-player start x {} outside board width {}",
                    start.x,
                    size.width
                );
            }
        }
        ensure!(self.initial_left_right_delay >= 0, "negative key delay");
        ensure!(self.fast_left_right_delay >= 0, "negative key delay");
        ensure!(self.initial_down_delay >= 0, "negative key delay");
        ensure!(self.fast_down_delay >= 0, "negative key delay");
        ensure!(self.drop_interval >= 0, "negative drop interval");
        Ok(())
    }

    /// Validate, then configure the logic's layouts and key delays.
    pub fn apply_to(&self, logic: &mut Logic) -> Result<()> {
        self.validate()?;
        for (index, layout) in self.layouts.iter().enumerate() {
            logic.set_board_size_for_player_count(index + 1, layout.board_size);
            logic.set_block_start_positions(index + 1, layout.start_positions.clone());
        }
        logic.set_initial_left_right_delay(self.initial_left_right_delay);
        logic.set_fast_left_right_delay(self.fast_left_right_delay);
        logic.set_initial_down_delay(self.initial_down_delay);
        logic.set_fast_down_delay(self.fast_down_delay);
        Ok(())
    }
}
