//! Per-metric normalization of raw values to scores in `[0, 1]`.
//!
//! Each metric maps to a [`MetricNormalizer`] through a [`ScoreTable`].
//! The standard table holds one piecewise-linear [`ScoreCurve`] per metric
//! family:
//!
//! | Family | Knots (raw, score) |
//! |---|---|
//! | Valuation (PE) | (0, 1.0) (30, 0.5) (100, 0.0) |
//! | Return on capital (ROCE, ROE, OPM, CROIC) | (0, 0.0) (12, 0.5) (50, 1.0) |
//! | Promoter holding (PromHold) | (0, 0.0) (50, 0.5) (100, 1.0) |
//! | Growth variance (Salesvar, ProfitVar) | (0, 0.0) (8, 0.5) (50, 1.0) |
//!
//! Outside the outermost knots the curve is flat.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use fundlens_core::numeric::clamp_unit;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Metric, MetricFamily};

/// Score assigned to values that are present but not numeric.
pub const NEUTRAL_SCORE: f64 = 0.5;

const VALUATION_KNOTS: [(f64, f64); 3] = [(0.0, 1.0), (30.0, 0.5), (100.0, 0.0)];
const RETURN_ON_CAPITAL_KNOTS: [(f64, f64); 3] = [(0.0, 0.0), (12.0, 0.5), (50.0, 1.0)];
const PROMOTER_HOLDING_KNOTS: [(f64, f64); 3] = [(0.0, 0.0), (50.0, 0.5), (100.0, 1.0)];
const GROWTH_VARIANCE_KNOTS: [(f64, f64); 3] = [(0.0, 0.0), (8.0, 0.5), (50.0, 1.0)];

static STANDARD_TABLE: Lazy<ScoreTable> = Lazy::new(|| ScoreTable {
    normalizers: Metric::ALL
        .into_iter()
        .map(|m| {
            let curve: Arc<dyn MetricNormalizer> = Arc::new(ScoreCurve::standard(m.family()));
            (m, curve)
        })
        .collect(),
});

/// Maps a raw metric value to a score.
///
/// Implementations need not handle NaN or clamp; [`ScoreTable`] does both.
pub trait MetricNormalizer: Send + Sync {
    /// Score for a finite or infinite raw value.
    fn normalize(&self, raw: f64) -> f64;
}

impl<F> MetricNormalizer for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn normalize(&self, raw: f64) -> f64 {
        self(raw)
    }
}

/// Piecewise-linear score curve through a list of knots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct ScoreCurve {
    knots: Vec<(f64, f64)>,
}

impl ScoreCurve {
    /// Creates a curve from `(raw, score)` knots.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidCurve` if there are fewer than two
    /// knots, raw values are not finite and strictly increasing, or any
    /// score lies outside `[0, 1]`.
    pub fn new(knots: Vec<(f64, f64)>) -> PortfolioResult<Self> {
        if knots.len() < 2 {
            return Err(PortfolioError::invalid_curve("at least two knots are required"));
        }
        if knots.iter().any(|&(x, _)| !x.is_finite()) {
            return Err(PortfolioError::invalid_curve("knot positions must be finite"));
        }
        if knots.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(PortfolioError::invalid_curve(
                "knot positions must be strictly increasing",
            ));
        }
        if knots.iter().any(|&(_, y)| !(0.0..=1.0).contains(&y)) {
            return Err(PortfolioError::invalid_curve("knot scores must lie in [0, 1]"));
        }
        Ok(Self { knots })
    }

    /// Standard curve for a metric family.
    #[must_use]
    pub fn standard(family: MetricFamily) -> Self {
        let knots = match family {
            MetricFamily::Valuation => VALUATION_KNOTS,
            MetricFamily::ReturnOnCapital => RETURN_ON_CAPITAL_KNOTS,
            MetricFamily::PromoterHolding => PROMOTER_HOLDING_KNOTS,
            MetricFamily::GrowthVariance => GROWTH_VARIANCE_KNOTS,
        };
        Self {
            knots: knots.to_vec(),
        }
    }

    /// The curve's knots.
    #[must_use]
    pub fn knots(&self) -> &[(f64, f64)] {
        &self.knots
    }

    /// Evaluates the curve, flat beyond the end knots. NaN maps to [`NEUTRAL_SCORE`].
    #[must_use]
    pub fn evaluate(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return NEUTRAL_SCORE;
        }
        // Constructors guarantee at least two knots.
        let (first_x, first_y) = self.knots[0];
        let (last_x, last_y) = self.knots[self.knots.len() - 1];
        if raw <= first_x {
            return clamp_unit(first_y);
        }
        if raw >= last_x {
            return clamp_unit(last_y);
        }

        let upper = self.knots.partition_point(|&(x, _)| x <= raw);
        let (x0, y0) = self.knots[upper - 1];
        let (x1, y1) = self.knots[upper];
        clamp_unit(y0 + (raw - x0) / (x1 - x0) * (y1 - y0))
    }
}

impl MetricNormalizer for ScoreCurve {
    fn normalize(&self, raw: f64) -> f64 {
        self.evaluate(raw)
    }
}

impl TryFrom<Vec<(f64, f64)>> for ScoreCurve {
    type Error = PortfolioError;

    fn try_from(knots: Vec<(f64, f64)>) -> PortfolioResult<Self> {
        Self::new(knots)
    }
}

impl From<ScoreCurve> for Vec<(f64, f64)> {
    fn from(curve: ScoreCurve) -> Self {
        curve.knots
    }
}

/// Normalizer per metric.
///
/// Every metric always has a normalizer: tables start from the standard
/// curves and builders only replace entries.
#[derive(Clone)]
pub struct ScoreTable {
    normalizers: BTreeMap<Metric, Arc<dyn MetricNormalizer>>,
}

impl ScoreTable {
    /// The process-wide standard table.
    #[must_use]
    pub fn standard() -> &'static ScoreTable {
        &STANDARD_TABLE
    }

    /// Starts a custom table from the standard curves.
    #[must_use]
    pub fn builder() -> ScoreTableBuilder {
        ScoreTableBuilder {
            normalizers: STANDARD_TABLE.normalizers.clone(),
        }
    }

    /// Scores `raw` for `metric`.
    ///
    /// NaN input, or a normalizer returning NaN, yields [`NEUTRAL_SCORE`].
    /// The result is always within `[0, 1]`.
    #[must_use]
    pub fn normalize(&self, metric: Metric, raw: f64) -> f64 {
        if raw.is_nan() {
            return NEUTRAL_SCORE;
        }
        let score = self
            .normalizers
            .get(&metric)
            .map_or(NEUTRAL_SCORE, |n| n.normalize(raw));
        if score.is_nan() {
            NEUTRAL_SCORE
        } else {
            clamp_unit(score)
        }
    }
}

impl fmt::Debug for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreTable")
            .field("metrics", &self.normalizers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for custom [`ScoreTable`]s.
pub struct ScoreTableBuilder {
    normalizers: BTreeMap<Metric, Arc<dyn MetricNormalizer>>,
}

impl ScoreTableBuilder {
    /// Replaces the curve for `metric`.
    #[must_use]
    pub fn curve(self, metric: Metric, curve: ScoreCurve) -> Self {
        self.normalizer(metric, curve)
    }

    /// Replaces the normalizer for `metric` with any strategy.
    #[must_use]
    pub fn normalizer(mut self, metric: Metric, normalizer: impl MetricNormalizer + 'static) -> Self {
        self.normalizers.insert(metric, Arc::new(normalizer));
        self
    }

    /// Builds the table.
    #[must_use]
    pub fn build(self) -> ScoreTable {
        ScoreTable {
            normalizers: self.normalizers,
        }
    }
}

/// Scores `raw` for `metric` with the standard table.
#[must_use]
pub fn normalize(metric: Metric, raw: f64) -> f64 {
    STANDARD_TABLE.normalize(metric, raw)
}
