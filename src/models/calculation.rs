use crate::models::interval::Interval;
use crate::utils::time::{format_decimal_hours, format_minutes};
use serde::Serialize;

/// One line of the per-interval breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub range: String,
    pub minutes: i64,
    /// `HH:MM`
    pub duration: String,
    /// Decimal hours, two digits.
    pub hours: String,
}

impl BreakdownRow {
    pub fn from_interval(interval: &Interval) -> Self {
        let minutes = interval.duration_minutes();
        Self {
            range: interval.range_label(),
            minutes,
            duration: format_minutes(minutes),
            hours: format_decimal_hours(minutes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub total_minutes: i64,
    pub morning_break_minutes: i64,
    pub lunch_break_minutes: i64,
    /// Total minus both breaks. Negative for days shorter than their breaks.
    pub effective_minutes: i64,
    pub rows: Vec<BreakdownRow>,
}

impl CalculationResult {
    pub fn effective_hhmm(&self) -> String {
        format_minutes(self.effective_minutes)
    }

    pub fn effective_hours(&self) -> String {
        format_decimal_hours(self.effective_minutes)
    }

    /// Summary sentence shown under the table.
    pub fn break_summary(&self) -> String {
        format!(
            "Subtracted {} ({}h) for morning break and {} ({}h) for lunchtime break",
            format_minutes(self.morning_break_minutes),
            format_decimal_hours(self.morning_break_minutes),
            format_minutes(self.lunch_break_minutes),
            format_decimal_hours(self.lunch_break_minutes),
        )
    }
}
