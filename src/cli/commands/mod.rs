pub mod calc;
pub mod config;
pub mod export;

use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::parser::tokenize;
use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;

/// `--now HH:MM` pins the clock; otherwise the local system time is used.
pub(crate) fn clock_for(now: &Option<String>) -> AppResult<Box<dyn Clock>> {
    match now {
        Some(t) => Ok(Box::new(FixedClock(t.parse::<ClockTime>()?))),
        None => Ok(Box::new(SystemClock)),
    }
}

/// Arguments may themselves contain separators (`"08:00-12:00"`).
pub(crate) fn tokens_from_args(args: &[String]) -> Vec<&str> {
    args.iter().flat_map(|a| tokenize(a)).collect()
}
