//! Configuration for portfolio scoring.

use serde::{Deserialize, Serialize};

/// How metrics with no contributing holding enter the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMetricPolicy {
    /// Every metric is reported; one with no contributors scores 0 and
    /// still participates in the overall average.
    #[default]
    ZeroContribution,
    /// A metric with no contributors is `None` and left out of the overall
    /// average.
    Exclude,
}

/// Score boundaries separating [`ScoreBand`](super::ScoreBand)s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    /// Scores strictly above this are at least `Moderate`.
    pub moderate: f64,
    /// Scores strictly above this are `Strong`.
    pub strong: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            moderate: 0.33,
            strong: 0.66,
        }
    }
}

/// Configuration for portfolio scoring.
///
/// Controls parallelism and the missing-metric policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum metric row count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Treatment of metrics no holding contributes to.
    pub missing_metric_policy: MissingMetricPolicy,

    /// Boundaries for score bands.
    pub band_thresholds: BandThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            missing_metric_policy: MissingMetricPolicy::default(),
            band_thresholds: BandThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the missing-metric policy.
    #[must_use]
    pub fn with_missing_metric_policy(mut self, policy: MissingMetricPolicy) -> Self {
        self.missing_metric_policy = policy;
        self
    }

    /// Sets the band thresholds.
    #[must_use]
    pub fn with_band_thresholds(mut self, thresholds: BandThresholds) -> Self {
        self.band_thresholds = thresholds;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
