//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Reasons a single CSV line is rejected during ingestion
///
/// None of these abort ingestion; the line is skipped and counted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected at least {expected} commas, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("pickup zone is empty")]
    EmptyZone,

    #[error("timestamp has no ':' separator")]
    MissingColon,

    #[error("no hour digits before ':'")]
    MissingHourDigits,

    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u32),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
