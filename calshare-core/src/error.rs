//! Error types for the calshare crates.

use thiserror::Error;

/// Errors that can occur while building share artifacts.
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid datetime: {0}")]
    DatetimeParse(#[from] chrono::ParseError),

    #[error("Invalid transition table: {0}")]
    InvalidTable(String),

    #[error("Unknown share site: {0}")]
    UnknownSite(String),
}

/// Result type alias for calshare operations.
pub type ShareResult<T> = Result<T, ShareError>;
