use crate::core::calculator::breaks::BreakDeductions;
use crate::models::calculation::{BreakdownRow, CalculationResult};
use crate::models::work_day::WorkDay;

/// Effective = sum of interval durations minus both breaks.
pub fn aggregate(day: &WorkDay, breaks: BreakDeductions) -> CalculationResult {
    let rows: Vec<BreakdownRow> = day
        .intervals()
        .iter()
        .map(BreakdownRow::from_interval)
        .collect();
    let total_minutes = day.total_minutes();

    CalculationResult {
        total_minutes,
        morning_break_minutes: breaks.morning,
        lunch_break_minutes: breaks.lunch,
        effective_minutes: total_minutes - breaks.total(),
        rows,
    }
}
