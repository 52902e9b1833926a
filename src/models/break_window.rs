use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use serde::{Deserialize, Serialize};

/// Time range during which a mandatory break is deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub start: ClockTime,
    pub end: ClockTime,
    /// Full break length in minutes.
    pub minutes: i64,
    /// Whether a day ending inside the window owes only part of the break.
    #[serde(default)]
    pub end_partial: bool,
}

impl BreakWindow {
    /// 15 minutes between 09:15 and 09:30.
    pub const MORNING: BreakWindow = BreakWindow {
        start: ClockTime::at(9, 15),
        end: ClockTime::at(9, 30),
        minutes: 15,
        end_partial: false,
    };

    /// 30 minutes between 12:00 and 13:00.
    pub const LUNCH: BreakWindow = BreakWindow {
        start: ClockTime::at(12, 0),
        end: ClockTime::at(13, 0),
        minutes: 30,
        end_partial: true,
    };

    /// Latest start (minutes since midnight) that still owes a break:
    /// window start plus the full break length.
    pub fn cutoff(&self) -> i64 {
        self.start.minutes() + self.minutes
    }

    pub fn length_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }

    pub fn validate(&self, name: &str) -> AppResult<()> {
        if self.start >= self.end {
            return Err(AppError::Config(format!(
                "{name}: window start {} must be before end {}",
                self.start, self.end
            )));
        }
        if self.minutes <= 0 || self.minutes > self.length_minutes() {
            return Err(AppError::Config(format!(
                "{name}: break of {} min does not fit into {} - {}",
                self.minutes, self.start, self.end
            )));
        }
        Ok(())
    }
}

/// The pair of break windows applied to every workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPolicy {
    pub morning: BreakWindow,
    pub lunch: BreakWindow,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            morning: BreakWindow::MORNING,
            lunch: BreakWindow::LUNCH,
        }
    }
}

impl BreakPolicy {
    pub fn validate(&self) -> AppResult<()> {
        self.morning.validate("morning_break")?;
        self.lunch.validate("lunch_break")
    }
}
