//! Error types for the Ronda framework.
//!
//! This module defines the error types used throughout the Ronda ecosystem.
//! Core computations fail fast and surface one typed error to the caller;
//! there is no silent coercion of degenerate inputs.

use thiserror::Error;

/// The main error type for Ronda operations.
///
/// This enum encompasses all error cases that can occur when estimating
/// risk, running hypothesis tests, or fetching market data.
#[derive(Debug, Error)]
pub enum RondaError {
    /// A parameter is outside its documented valid range (e.g. a confidence
    /// level or decay factor outside `(0, 1)`, or a degenerate variance).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The series or window is too short for the requested computation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The external data boundary failed (network error, unknown symbol,
    /// empty response). Never produced for an otherwise-valid empty window.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A date is out of range, unordered, or failed to parse.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
///
/// This is a convenience type that uses [`RondaError`] as the error type.
pub type Result<T> = std::result::Result<T, RondaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RondaError::InvalidParameter("lambda must be in (0, 1)".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: lambda must be in (0, 1)");

        let err = RondaError::InsufficientData("window has 10 points, need 30".to_string());
        assert_eq!(
            err.to_string(),
            "Insufficient data: window has 10 points, need 30"
        );
    }

    #[test]
    fn test_error_from_string() {
        let err: RondaError = "fail".into();
        assert!(matches!(err, RondaError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(RondaError::DataUnavailable("no data".to_string()));
        assert!(err_result.is_err());
    }
}
