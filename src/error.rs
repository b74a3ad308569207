//! Custom error types for budget-pace
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. User-correctable problems with budget and
//! expense data are *not* errors here: they are reported as data through
//! [`crate::services::ValidationReport`].

use thiserror::Error;

/// A date string that could not be understood as a calendar day
///
/// Raised at the data boundary only. The engine never re-parses dates, and
/// an unparseable date is never replaced by "today" or an epoch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{input}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct InvalidDateError {
    /// The rejected input, verbatim
    pub input: String,
}

impl InvalidDateError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// The main error type for budget-pace operations
#[derive(Error, Debug)]
pub enum PaceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A malformed date reached the data boundary
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    /// Malformed values other than dates (amounts, periods)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Snapshot files that are missing or unreadable
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PaceError {
    /// Check if this is a malformed-date error
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PaceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PaceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-pace operations
pub type PaceResult<T> = Result<T, PaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_date_is_distinct() {
        let err: PaceError = InvalidDateError::new("2025-13-40").into();
        assert!(err.is_invalid_date());
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid date '2025-13-40': expected YYYY-MM-DD or an RFC 3339 timestamp"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let pace_err: PaceError = io_err.into();
        assert!(matches!(pace_err, PaceError::Io(_)));
    }
}
