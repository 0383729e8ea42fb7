//! Monotonic time sources
//!
//! The scheduler compares elapsed wall time against fixed thresholds, so the
//! host samples one of these once per frame and passes the value in.

use std::cell::Cell;
use std::time::Instant;

/// A monotonic clock reporting seconds since some fixed origin
pub trait Clock {
    fn now(&self) -> f64;
}

/// Real wall-clock time since construction
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
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and headless runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move time forward; negative steps are ignored
    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1.0);
        clock.advance(0.25);
        clock.advance(-5.0);
        assert_eq!(clock.now(), 1.25);
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
