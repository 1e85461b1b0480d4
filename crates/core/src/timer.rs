//! Timer module - frame-counting gravity cadence
//!
//! The default [`DropTimer`]: counts ticks down from a fixed interval and
//! signals a drop on the tick the counter reaches zero. Difficulty curves
//! live outside the engine; a driver swaps the interval (or the whole
//! timer) to speed the game up.

use blockfall_types::DEFAULT_DROP_INTERVAL;

use crate::logic::DropTimer;

/// Drops every `interval + 1` ticks.
#[derive(Debug, Clone)]
pub struct FrameDropTimer {
    timer: i32,
    interval: i32,
}

impl FrameDropTimer {
    pub fn new(interval: i32) -> Self {
        Self {
            timer: interval,
            interval,
        }
    }
}

impl Default for FrameDropTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DROP_INTERVAL)
    }
}

impl DropTimer for FrameDropTimer {
    fn reset(&mut self) {
        self.timer = self.interval;
    }

    fn update(&mut self) {
        self.timer -= 1;
        if self.timer < 0 {
            self.reset();
        }
    }

    fn is_time_to_drop(&self) -> bool {
        self.timer == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut timer = FrameDropTimer::new(2);
        let mut fired = Vec::new();
        for tick in 0..7 {
            timer.update();
            if timer.is_time_to_drop() {
                fired.push(tick);
            }
        }
        assert_eq!(fired, [1, 4]);
    }

    #[test]
    fn reset_restarts_the_countdown() {
        let mut timer = FrameDropTimer::new(2);
        timer.update();
        assert!(!timer.is_time_to_drop());
        timer.reset();
        timer.update();
        assert!(!timer.is_time_to_drop());
        timer.update();
        assert!(timer.is_time_to_drop());
    }

    #[test]
    fn zero_interval_fires_on_every_update() {
        let mut timer = FrameDropTimer::new(0);
        for _ in 0..3 {
            timer.update();
            assert!(timer.is_time_to_drop());
        }
    }
}
