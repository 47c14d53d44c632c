//! # Fundlens Portfolio
//!
//! Allocation-weighted fundamental scoring for equity fund portfolios.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all calculations are stateless with explicit inputs
//! - **Strategy table**: each metric maps to a normalizer in a [`ScoreTable`]
//! - **Total scoring**: absent or non-numeric data degrades to neutral or
//!   `None` scores, never to errors
//! - **Config-driven parallelism**: optional rayon support with threshold-based switching
//!
//! ## Scoring
//!
//! 1. Normalize each raw metric value to `[0, 1]` with its metric's curve
//! 2. Sum allocations per identifier to get each holding's weight
//! 3. Per metric, sum `weight * score` over rows matching a holding
//! 4. Divide by the total allocation; average the metric scores for `overall`
//!
//! ## Quick Start
//!
//! ```rust
//! use fundlens_portfolio::prelude::*;
//!
//! let rows = vec![
//!     MetricRow::new("A").with_value(Metric::ReturnOnCapitalEmployed, 50.0),
//!     MetricRow::new("B").with_value(Metric::ReturnOnCapitalEmployed, 12.0),
//! ];
//! let holdings = vec![Holding::new("A", 60.0), Holding::new("B", 40.0)];
//!
//! let score = MetricScorer::default().score(&rows, &holdings);
//! let roce = score.get(Metric::ReturnOnCapitalEmployed).unwrap();
//! assert!((roce - 0.8).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large metric tables

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bucketing;
pub mod error;
pub mod record;
pub mod scoring;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

pub use types::{
    BandThresholds, Holding, Metric, MetricFamily, MetricRow, MissingMetricPolicy,
    PortfolioScore, ScoreBand, ScoringConfig,
};

pub use bucketing::{
    sector_allocation, summarize_holdings, HoldingsSummary, SectorBucket, SectorDistribution,
};
pub use record::{
    holdings_from_records, metric_rows_from_records, HoldingRecord, MetricRecord, RawNumber,
};
pub use scoring::{
    aggregate_allocations, normalize, score_matrix, AllocationMap, HeatmapCell, HeatmapRow,
    MetricNormalizer, MetricScorer, ScoreCurve, ScoreTable, ScoreTableBuilder, NEUTRAL_SCORE,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use fundlens_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bucketing::{
        sector_allocation, summarize_holdings, HoldingsSummary, SectorDistribution,
    };
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::record::{
        holdings_from_records, metric_rows_from_records, HoldingRecord, MetricRecord,
    };
    pub use crate::scoring::{
        normalize, score_matrix, HeatmapRow, MetricScorer, ScoreCurve, ScoreTable,
    };
    pub use crate::types::{
        BandThresholds, Holding, Metric, MetricRow, MissingMetricPolicy, PortfolioScore,
        ScoreBand, ScoringConfig,
    };
}
