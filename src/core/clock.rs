//! Monotonic time source sampled once per tick.
//!
//! Timestamps are durations since the clock's origin. Wall-clock time is never
//! used, so shield timers and attack cooldowns cannot jump when the system
//! clock changes.

use super::constants::TICK_INTERVAL_MS;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Real monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that only moves when advanced. Used for headless runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    elapsed: Duration,
    step: Duration,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            step,
        }
    }

    /// One step per game tick.
    pub fn per_tick() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }

    pub fn advance(&mut self) -> Duration {
        self.elapsed += self.step;
        self.elapsed
    }

    pub fn advance_by(&mut self, amount: Duration) -> Duration {
        self.elapsed += amount;
        self.elapsed
    }
}

impl Clock for FixedStepClock {
    fn now(&self) -> Duration {
        self.elapsed
    }
}
