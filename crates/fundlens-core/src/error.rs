//! Error types for the Fundlens core crate.
//!
//! Errors only arise while turning raw input into domain types. The
//! analytics built on top of these types degrade instead of failing.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Date string could not be parsed or is out of range.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unrecognised time-range token.
    #[error("Invalid range token '{token}': expected one of 1M, 6M, 1Y, 3Y, 5Y, ALL")]
    InvalidRange {
        /// The token that was supplied.
        token: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid range token error.
    #[must_use]
    pub fn invalid_range(token: impl Into<String>) -> Self {
        Self::InvalidRange {
            token: token.into(),
        }
    }
}
