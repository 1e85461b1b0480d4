//! Animation module - line-clear flash state
//!
//! The default [`LineAnimation`]: holds the simulation for a fixed number of
//! ticks while the cleared lines blink. The engine only consumes
//! `is_running`; the `lines`/`is_blink_on` accessors exist for an external
//! renderer to draw the flash.

use blockfall_types::{FLASH_TOGGLE_PERIOD, LINE_FLASH_TICKS};

use crate::logic::LineAnimation;

/// Blinking-lines gate that runs for [`LINE_FLASH_TICKS`] ticks.
#[derive(Debug, Clone, Default)]
pub struct FlashAnimation {
    lines: Vec<usize>,
    timer: i32,
    blink_on: bool,
}

impl FlashAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines currently flashing (empty when idle).
    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    /// Whether the flash overlay is visible this tick.
    pub fn is_blink_on(&self) -> bool {
        self.blink_on
    }
}

impl LineAnimation for FlashAnimation {
    fn start(&mut self, lines: &[usize]) {
        self.lines = lines.to_vec();
        self.timer = LINE_FLASH_TICKS;
        self.blink_on = true;
    }

    fn update(&mut self) {
        if self.timer % FLASH_TOGGLE_PERIOD == 2 {
            self.blink_on = !self.blink_on;
        }
        self.timer -= 1;
    }

    fn is_running(&self) -> bool {
        self.timer > 0
    }
}
