//! Error types for portfolio scoring.
//!
//! Scoring itself is total; these errors come from ingesting records and
//! from building custom score curves.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Invalid holding data.
    #[error("Invalid holding '{id}': {reason}")]
    InvalidHolding {
        /// The holding identifier.
        id: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Invalid metric row.
    #[error("Invalid metric row '{id}': {reason}")]
    InvalidMetricRow {
        /// The row identifier.
        id: String,
        /// The reason the row is invalid.
        reason: String,
    },

    /// Metric name outside the fixed metric set.
    #[error("Unknown metric '{name}'")]
    UnknownMetric {
        /// The unrecognised name.
        name: String,
    },

    /// Score curve definition is malformed.
    #[error("Invalid score curve: {reason}")]
    InvalidCurve {
        /// The reason the curve is invalid.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid metric row error.
    #[must_use]
    pub fn invalid_metric_row(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetricRow {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown metric error.
    #[must_use]
    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Self::UnknownMetric { name: name.into() }
    }

    /// Create an invalid curve error.
    #[must_use]
    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }
}
