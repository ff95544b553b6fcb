//! # Error Types
//!
//! Structured error types for wind_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! All errors originate from input validation or input parsing. The
//! calculation functions themselves are total: once inputs pass
//! validation, every compute path returns a plain value.
//!
//! ## Example
//!
//! ```rust
//! use wind_core::errors::{WindError, WindResult};
//!
//! fn validate_speed(wind_speed_mph: f64) -> WindResult<()> {
//!     if wind_speed_mph <= 0.0 {
//!         return Err(WindError::InvalidInput {
//!             field: "wind_speed_mph".to_string(),
//!             value: wind_speed_mph.to_string(),
//!             reason: "Wind speed must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wind_core operations
pub type WindResult<T> = Result<T, WindError>;

/// Structured error type for input handling.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WindError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A string did not match any known category or option
    #[error("Unrecognized {field}: '{value}'")]
    Unrecognized { field: String, value: String },
}

impl WindError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WindError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Unrecognized error
    pub fn unrecognized(field: impl Into<String>, value: impl Into<String>) -> Self {
        WindError::Unrecognized {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WindError::InvalidInput { .. } => "INVALID_INPUT",
            WindError::Unrecognized { .. } => "UNRECOGNIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = WindError::invalid_input("wind_speed_mph", "-5.0", "Wind speed must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: WindError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            WindError::invalid_input("height_ft", "0", "must be positive").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(WindError::unrecognized("exposure", "X").error_code(), "UNRECOGNIZED");
    }

    #[test]
    fn test_error_display() {
        let error = WindError::unrecognized("risk category", "V");
        assert_eq!(error.to_string(), "Unrecognized risk category: 'V'");
    }
}
