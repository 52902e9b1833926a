use crate::errors::AppError;
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2})$").expect("valid HH:MM pattern"));

/// Wall-clock time of day at minute resolution.
///
/// Stored as minutes since midnight, so ordering and subtraction are plain
/// integer operations. All arithmetic returns new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Builds a time from literal hour/minute values.
    /// Panics on out-of-range input; meant for constants.
    pub const fn at(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "hour or minute out of range");
        Self {
            minutes: hour * 60 + minute,
        }
    }

    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    pub fn from_minutes(minutes: i64) -> Option<Self> {
        if (0..MINUTES_PER_DAY).contains(&minutes) {
            Some(Self {
                minutes: minutes as u16,
            })
        } else {
            None
        }
    }

    pub fn from_naive_time(t: NaiveTime) -> Self {
        Self {
            minutes: (t.hour() * 60 + t.minute()) as u16,
        }
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> i64 {
        i64::from(self.minutes)
    }

    /// Returns `None` when the result leaves the 00:00–23:59 range.
    pub fn add_minutes(self, delta: i64) -> Option<Self> {
        Self::from_minutes(self.minutes() + delta)
    }

    pub fn sub_minutes(self, delta: i64) -> Option<Self> {
        Self::from_minutes(self.minutes() - delta)
    }

    /// Signed distance to `later`; negative when `later` is earlier.
    pub fn minutes_until(self, later: ClockTime) -> i64 {
        later.minutes() - self.minutes()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Strict `HH:MM` parsing (one or two digits per field). `now` is handled by
/// the token parser, not here.
impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidTimeFormat(s.to_string());
        let caps = HHMM.captures(s).ok_or_else(invalid)?;
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_zero_padded() {
        let t: ClockTime = "9:5".parse().unwrap();
        assert_eq!(t, ClockTime::at(9, 5));
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(t.minutes(), 545);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for bad in ["24:00", "12:60", "12", "12:30:00", ":30", "ab:cd", "-1:00", ""] {
            let err = bad.parse::<ClockTime>().unwrap_err();
            assert!(
                matches!(err, AppError::InvalidTimeFormat(ref tok) if tok == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn arithmetic_returns_new_values() {
        let t = ClockTime::at(9, 50);
        let later = t.add_minutes(25).unwrap();
        assert_eq!(later, ClockTime::at(10, 15));
        assert_eq!(t, ClockTime::at(9, 50));
        assert_eq!(t.minutes_until(later), 25);
        assert_eq!(later.minutes_until(t), -25);
        assert_eq!(ClockTime::at(0, 10).sub_minutes(11), None);
        assert_eq!(ClockTime::at(23, 59).add_minutes(1), None);
    }

    #[test]
    fn converts_from_chrono() {
        let nt = NaiveTime::from_hms_opt(17, 42, 59).unwrap();
        assert_eq!(ClockTime::from_naive_time(nt), ClockTime::at(17, 42));
    }

    #[test]
    fn serde_uses_hhmm_strings() {
        let yaml = serde_yaml::to_string(&ClockTime::at(12, 0)).unwrap();
        assert_eq!(yaml.trim().trim_matches(|c| c == '\'' || c == '"'), "12:00");
        let back: ClockTime = serde_yaml::from_str("'7:30'").unwrap();
        assert_eq!(back, ClockTime::at(7, 30));
        assert!(serde_yaml::from_str::<ClockTime>("'25:00'").is_err());
    }
}
