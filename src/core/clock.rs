//! Source of the current wall-clock time used to resolve `now` tokens.

use crate::models::clock_time::ClockTime;

pub trait Clock {
    fn now(&self) -> ClockTime;
}

/// Local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_naive_time(chrono::Local::now().time())
    }
}

/// Always answers the same time. Used by `--now` and by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl Clock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
