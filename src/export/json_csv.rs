// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::calculation::CalculationResult;
use crate::utils::time::{format_decimal_hours, format_minutes};

/// Pretty-printed JSON of the whole result.
pub(crate) fn render_json(result: &CalculationResult) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(result)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    json.push('\n');
    Ok(json)
}

/// One CSV record per interval (header from serde), followed by the break
/// and total records using the same columns.
pub(crate) fn render_csv(result: &CalculationResult) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in &result.rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let summary = [
        ("Morning break", result.morning_break_minutes),
        ("Lunch break", result.lunch_break_minutes),
        ("Total", result.effective_minutes),
    ];
    for (label, mins) in summary {
        wtr.write_record([
            label.to_string(),
            mins.to_string(),
            format_minutes(mins),
            format_decimal_hours(mins),
        ])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
