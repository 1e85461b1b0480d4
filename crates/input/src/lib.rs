//! Input repeat handling.
//!
//! A held key should act once immediately, wait, and then start repeating at
//! a faster rate. [`RepeatableKey`] models that behavior for one key of one
//! player, counted in game ticks rather than wall-clock time so the engine
//! stays deterministic.

/// Repeat state machine for a single directional key.
///
/// Lifecycle: [`press`](RepeatableKey::press) fires only on the up-to-down
/// edge and arms the initial delay; while the key stays down,
/// [`update`](RepeatableKey::update) counts the timer down once per tick and
/// fires a repeat each time it runs out, rearming with the fast delay. A
/// delay of 0 repeats on every tick.
#[derive(Debug, Clone)]
pub struct RepeatableKey {
    timer: i32,
    initial_delay: i32,
    fast_delay: i32,
    down: bool,
}

impl RepeatableKey {
    pub fn new(initial_delay: i32, fast_delay: i32) -> Self {
        Self {
            timer: 0,
            initial_delay,
            fast_delay,
            down: false,
        }
    }

    /// Registers the key going down. Returns true only on the up-to-down
    /// edge; a key that is already down does not trigger again.
    pub fn press(&mut self) -> bool {
        if self.down {
            return false;
        }
        self.down = true;
        self.timer = self.initial_delay;
        true
    }

    /// Registers the key going up.
    pub fn release(&mut self) {
        self.down = false;
    }

    /// Advances the repeat timer by one tick. Returns true when a repeat
    /// fires, which rearms the timer with the fast delay.
    pub fn update(&mut self) -> bool {
        if self.down {
            self.timer -= 1;
            if self.timer < 0 {
                self.timer = self.fast_delay;
                return true;
            }
        }
        false
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Zeroes the timer so the next `update` fires immediately. Called when
    /// the keyed action was blocked, so the key acts the moment the
    /// obstruction clears instead of waiting out the running delay.
    pub fn blocked(&mut self) {
        self.timer = 0;
    }
}
