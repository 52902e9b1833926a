// src/export/text.rs

use crate::models::calculation::CalculationResult;
use crate::utils::table::{Align, Column, Table};
use ansi_term::Colour::Green;
use ansi_term::Style;

/// Breakdown table, a `Total` row with the effective time and the break summary.
pub(crate) fn render_text(result: &CalculationResult, color: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("Range", Align::Left),
        Column::new("Time", Align::Right),
        Column::new("Hours", Align::Right),
    ]);

    for row in &result.rows {
        table.add_row(vec![row.range.clone(), row.duration.clone(), row.hours.clone()]);
    }
    table.add_row(vec![
        "Total".to_string(),
        result.effective_hhmm(),
        result.effective_hours(),
    ]);

    let mut lines = table.render_lines();
    if color {
        let header_style = Style::new().bold();
        lines[0] = header_style.paint(lines[0].as_str()).to_string();
        if let Some(total) = lines.last_mut() {
            *total = Green.bold().paint(total.as_str()).to_string();
        }
    }

    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out.push_str(&result.break_summary());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::logic::Core;
    use crate::models::break_window::BreakPolicy;
    use crate::models::clock_time::ClockTime;

    #[test]
    fn plain_text_layout() {
        let result = Core::calculate_with(
            "09:00 17:00",
            &FixedClock(ClockTime::at(0, 0)),
            &BreakPolicy::default(),
        )
        .unwrap();

        let text = render_text(&result, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Range           Time  Hours");
        assert_eq!(lines[2], "09:00 - 17:00  08:00   8.00");
        assert_eq!(lines[3], "Total          07:15   7.25");
        assert_eq!(
            lines[5],
            "Subtracted 00:15 (0.25h) for morning break and 00:30 (0.50h) for lunchtime break"
        );
        assert!(!text.contains('\x1b'));
    }
}
