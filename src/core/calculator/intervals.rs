//! Groups a stream of clock times into validated in/out intervals.

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::interval::Interval;
use crate::models::work_day::WorkDay;

/// Pairs times as they arrive, so the first offending pair is the one reported.
#[derive(Debug, Default)]
pub struct IntervalBuilder {
    pending: Option<ClockTime>,
    intervals: Vec<Interval>,
}

impl IntervalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, time: ClockTime) -> AppResult<()> {
        let Some(start) = self.pending.take() else {
            self.pending = Some(time);
            return Ok(());
        };

        let interval = Interval::new(start, time)?;
        if let Some(prev) = self.intervals.last() {
            WorkDay::check_follows(prev, &interval)?;
        }
        self.intervals.push(interval);
        Ok(())
    }

    pub fn finish(self) -> AppResult<WorkDay> {
        if self.pending.is_some() {
            return Err(AppError::OddTimestampCount);
        }
        WorkDay::new(self.intervals)
    }
}

/// Builds a workday from already parsed times.
pub fn build_work_day(times: impl IntoIterator<Item = ClockTime>) -> AppResult<WorkDay> {
    let mut builder = IntervalBuilder::new();
    for t in times {
        builder.push(t)?;
    }
    builder.finish()
}
