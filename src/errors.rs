//! Unified application error type.
//! The calculator, the config layer and the CLI all return AppError so the
//! binary has a single place where failures are reported.

use crate::models::clock_time::ClockTime;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("\"{0}\" is not a valid time")]
    InvalidTimeFormat(String),

    // ---------------------------
    // Interval errors
    // ---------------------------
    #[error("Invalid order of timestamps: {start} is after {end}")]
    InvalidIntervalOrder { start: ClockTime, end: ClockTime },

    #[error("Invalid order of ranges: {start} is before {previous_end}")]
    OverlappingIntervals {
        start: ClockTime,
        previous_end: ClockTime,
    },

    #[error("Odd number of timestamps, add another time entry or \"now\" for the current time")]
    OddTimestampCount,

    #[error("Add timestamp entries or \"now\" for the current time")]
    EmptyInput,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for errors caused by the entered times (as opposed to I/O or config).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidTimeFormat(_)
                | AppError::InvalidIntervalOrder { .. }
                | AppError::OverlappingIntervals { .. }
                | AppError::OddTimestampCount
                | AppError::EmptyInput
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
