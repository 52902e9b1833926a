//! Tokenizing and parsing of user-entered clock times.

use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;
use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,\-.;]+").expect("valid separator pattern"));

/// Splits raw input on whitespace, `,`, `-`, `.` and `;`, dropping empty pieces.
pub fn tokenize(input: &str) -> Vec<&str> {
    SEPARATORS
        .split(input)
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Parses `now` (any case) or `HH:MM`.
pub fn parse_token(token: &str, clock: &dyn Clock) -> AppResult<ClockTime> {
    if token.eq_ignore_ascii_case("now") {
        return Ok(clock.now());
    }
    token.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::errors::AppError;

    #[test]
    fn splits_on_all_separators() {
        assert_eq!(
            tokenize(" 08:00-12:00,\n12:30 ; 17:15.\r\n"),
            vec!["08:00", "12:00", "12:30", "17:15"]
        );
        assert!(tokenize("  \n ,;").is_empty());
    }

    #[test]
    fn now_uses_the_clock() {
        let clock = FixedClock(ClockTime::at(16, 20));
        assert_eq!(parse_token("NOW", &clock).unwrap(), ClockTime::at(16, 20));
        assert_eq!(parse_token("now", &clock).unwrap(), ClockTime::at(16, 20));
    }

    #[test]
    fn invalid_token_is_carried_in_error() {
        let clock = FixedClock(ClockTime::at(0, 0));
        let err = parse_token("25:00", &clock).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimeFormat(ref t) if t == "25:00"));
        assert_eq!(err.to_string(), "\"25:00\" is not a valid time");
    }
}
