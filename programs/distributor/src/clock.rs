//! Logical time source read by the engine.

use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;

/// Monotonic unix-seconds clock. The engine reads it and never advances it.
pub trait LogicalClock {
    fn now(&self) -> i64;
}

/// Runtime clock sysvar, for callers that fetch it with `Clock::get()`.
impl LogicalClock for Clock {
    fn now(&self) -> i64 {
        self.unix_timestamp
    }
}

/// Externally driven clock for orchestration and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: i64,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self { now }
    }

    /// Advance by `seconds`.
    pub fn sleep(&mut self, seconds: u64) {
        let delta = i64::try_from(seconds).unwrap_or(i64::MAX);
        self.now = self.now.saturating_add(delta);
    }

    pub fn sleep_days(&mut self, days: u64) {
        self.sleep(days.saturating_mul(SECONDS_PER_DAY as u64));
    }

    /// Jump to `timestamp`. Time never moves backwards; earlier targets are ignored.
    pub fn seek(&mut self, timestamp: i64) {
        self.now = self.now.max(timestamp);
    }
}

impl LogicalClock for ManualClock {
    fn now(&self) -> i64 {
        self.now
    }
}
