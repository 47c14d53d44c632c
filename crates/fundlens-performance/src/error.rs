//! Error types for performance series ingestion.
//!
//! Alignment itself never fails; these errors come from converting raw
//! input records into [`Series`](crate::types::Series) and from validating
//! an [`AlignConfig`](crate::AlignConfig).

use thiserror::Error;

/// Result type for performance operations.
pub type PerformanceResult<T> = Result<T, PerformanceError>;

/// Errors that can occur while building series from input records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerformanceError {
    /// A point could not be converted (usually an unparseable date).
    #[error("Invalid point in series '{series}': {reason}")]
    InvalidPoint {
        /// Name of the series containing the point.
        series: String,
        /// The reason the point is invalid.
        reason: String,
    },

    /// The series itself is malformed.
    #[error("Invalid series: {reason}")]
    InvalidSeries {
        /// The reason the series is invalid.
        reason: String,
    },

    /// Two series in one request share a name.
    #[error("Duplicate series name '{name}'")]
    DuplicateSeries {
        /// The repeated name.
        name: String,
    },

    /// An alignment setting is out of range.
    #[error("Invalid alignment config: {reason}")]
    InvalidConfig {
        /// What is wrong with the setting.
        reason: String,
    },
}

impl PerformanceError {
    /// Create an invalid point error.
    #[must_use]
    pub fn invalid_point(series: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPoint {
            series: series.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid series error.
    #[must_use]
    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }

    /// Create a duplicate series error.
    #[must_use]
    pub fn duplicate_series(name: impl Into<String>) -> Self {
        Self::DuplicateSeries { name: name.into() }
    }

    /// Create an invalid config error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
