//! Portfolio-level scoring results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BandThresholds, Metric};

/// Qualitative band for a score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// At or below the moderate threshold.
    Weak,
    /// Above the moderate threshold, at or below the strong threshold.
    Moderate,
    /// Above the strong threshold.
    Strong,
}

impl ScoreBand {
    /// Classifies a score.
    #[must_use]
    pub fn classify(score: f64, thresholds: &BandThresholds) -> Self {
        if score > thresholds.strong {
            ScoreBand::Strong
        } else if score > thresholds.moderate {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ScoreBand::Weak => "weak",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Strong => "strong",
        }
    }
}

/// Allocation-weighted scores for one portfolio.
///
/// Serializes flat: `{"PE": 0.5, ..., "CROIC": 0.1, "overall": 0.4}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioScore {
    /// Score per metric; `None` when undefined.
    #[serde(flatten)]
    pub per_metric: BTreeMap<Metric, Option<f64>>,

    /// Mean of the defined per-metric scores.
    pub overall: Option<f64>,
}

impl PortfolioScore {
    /// A score with every metric and the overall undefined.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            per_metric: Metric::ALL.into_iter().map(|m| (m, None)).collect(),
            overall: None,
        }
    }

    /// Score for one metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.per_metric.get(&metric).copied().flatten()
    }

    /// Returns true if nothing is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overall.is_none() && self.per_metric.values().all(Option::is_none)
    }

    /// Band of the overall score.
    #[must_use]
    pub fn band(&self, thresholds: &BandThresholds) -> Option<ScoreBand> {
        self.overall.map(|s| ScoreBand::classify(s, thresholds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let t = BandThresholds::default();
        assert_eq!(ScoreBand::classify(0.9, &t), ScoreBand::Strong);
        assert_eq!(ScoreBand::classify(0.66, &t), ScoreBand::Moderate);
        assert_eq!(ScoreBand::classify(0.34, &t), ScoreBand::Moderate);
        assert_eq!(ScoreBand::classify(0.33, &t), ScoreBand::Weak);
        assert_eq!(ScoreBand::classify(0.0, &t), ScoreBand::Weak);
    }

    #[test]
    fn test_empty() {
        let score = PortfolioScore::empty();
        assert!(score.is_empty());
        assert_eq!(score.per_metric.len(), Metric::ALL.len());
        assert_eq!(score.band(&BandThresholds::default()), None);
    }

    #[test]
    fn test_flat_serialization() {
        let mut score = PortfolioScore::empty();
        score.per_metric.insert(Metric::PriceEarnings, Some(0.5));
        score.overall = Some(0.5);

        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["PE"], 0.5);
        assert!(json["ROCE"].is_null());
        assert_eq!(json["overall"], 0.5);
    }
}
