//! Time series of fund observations.

use fundlens_core::Date;
use serde::{Deserialize, Serialize};

/// A single dated observation (typically a NAV print).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Calendar date of the observation.
    pub date: Date,
    /// Observed value.
    pub value: f64,
}

impl TimePoint {
    /// Creates a new observation.
    #[must_use]
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

/// A named sequence of observations for one fund.
///
/// Points may be unsorted and may repeat a date; the aligner handles both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Series name, unique within one alignment request.
    pub name: String,
    /// Observations in the order received.
    pub points: Vec<TimePoint>,
}

impl Series {
    /// Creates an empty series.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Creates a series from existing points.
    #[must_use]
    pub fn from_points(name: impl Into<String>, points: Vec<TimePoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Appends an observation.
    #[must_use]
    pub fn with_point(mut self, date: Date, value: f64) -> Self {
        self.points.push(TimePoint::new(date, value));
        self
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
