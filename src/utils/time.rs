//! Time utilities: formatting minute counts as HH:MM or decimal hours.

/// Signed `HH:MM`, e.g. `07:15` or `-00:05`.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Decimal hours with two digits, e.g. 435 → `7.25`.
pub fn format_decimal_hours(mins: i64) -> String {
    format!("{:.2}", mins as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hhmm() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(435), "07:15");
        assert_eq!(format_minutes(-5), "-00:05");
        assert_eq!(format_minutes(1500), "25:00");
    }

    #[test]
    fn formats_decimal() {
        assert_eq!(format_decimal_hours(435), "7.25");
        assert_eq!(format_decimal_hours(10), "0.17");
        assert_eq!(format_decimal_hours(0), "0.00");
        assert_eq!(format_decimal_hours(-30), "-0.50");
    }
}
