//! Drop timer - gravity scheduling
//!
//! The frame loop reports elapsed time; once the accumulated time is strictly
//! greater than the interval the session performs one drop. Every drop resets
//! the accumulator, whether gravity or the player triggered it.

use crate::types::DEFAULT_DROP_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl DropTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Add elapsed time. Returns true when a drop is due.
    ///
    /// At most one drop is reported per call no matter how large `delta_ms`
    /// is; the caller resets the timer through the drop itself.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(delta_ms);
        self.accumulated_ms > self.interval_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

impl Default for DropTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DROP_INTERVAL_MS)
    }
}
