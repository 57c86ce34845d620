//! Pedal-assist level counter.
//!
//! The level is a plain `u8` that wraps in both directions: one press of
//! DOWN at level 0 lands on 255, one press of UP at 255 lands on 0. The
//! stock pad behaves this way and the motor controller copes with it
//! (out-of-table levels are sent as level 0), so the wrap is kept rather
//! than clamped.

use crate::config::DEFAULT_ASSIST_LEVEL;

/// Current pedal-assist level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AssistLevel(u8);

impl AssistLevel {
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// One step up, wrapping past `u8::MAX`.
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// One step down, wrapping below 0.
    pub fn decrement(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }

    pub fn current(&self) -> u8 {
        self.0
    }
}

impl Default for AssistLevel {
    /// Boot level.
    fn default() -> Self {
        Self(DEFAULT_ASSIST_LEVEL)
    }
}
