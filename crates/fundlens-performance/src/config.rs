//! Configuration for series alignment.

use fundlens_core::numeric::MAX_DECIMAL_PLACES;
use serde::{Deserialize, Serialize};

use crate::error::{PerformanceError, PerformanceResult};

/// Configuration for [`SeriesAligner`](crate::SeriesAligner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Decimal places kept on each percentage-change cell, at most
    /// [`MAX_DECIMAL_PLACES`].
    pub decimal_places: u32,

    /// Drop observations dated after "now".
    /// When false only the lower cutoff is applied.
    pub clip_to_now: bool,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            clip_to_now: true,
        }
    }
}

impl AlignConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of decimal places for percentage cells, capped at
    /// [`MAX_DECIMAL_PLACES`].
    #[must_use]
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places.min(MAX_DECIMAL_PLACES);
        self
    }

    /// Sets whether observations after "now" are dropped.
    #[must_use]
    pub fn with_clip_to_now(mut self, clip: bool) -> Self {
        self.clip_to_now = clip;
        self
    }

    /// Checks settings read from a file.
    ///
    /// # Errors
    ///
    /// Returns `PerformanceError::InvalidConfig` if `decimal_places` exceeds
    /// [`MAX_DECIMAL_PLACES`].
    pub fn validate(&self) -> PerformanceResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(PerformanceError::invalid_config(format!(
                "decimal_places {} exceeds {MAX_DECIMAL_PLACES}",
                self.decimal_places
            )));
        }
        Ok(())
    }
}
