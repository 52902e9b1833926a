use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;

/// One clock-in/clock-out span. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: ClockTime,
    end: ClockTime,
}

impl Interval {
    pub fn new(start: ClockTime, end: ClockTime) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidIntervalOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }

    /// `"HH:MM - HH:MM"`
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}
