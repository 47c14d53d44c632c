//! Fundamental metric scoring.
//!
//! - [`curve`]: raw value to `[0, 1]` normalization per metric
//! - [`aggregate`]: allocation-weighted portfolio scores
//! - [`heatmap`]: per-holding score matrix
//!
//! All functions are pure; the only shared state is the read-only
//! standard [`ScoreTable`].

pub mod aggregate;
pub mod curve;
pub mod heatmap;

pub use aggregate::{aggregate_allocations, AllocationMap, MetricScorer};
pub use curve::{
    normalize, MetricNormalizer, ScoreCurve, ScoreTable, ScoreTableBuilder, NEUTRAL_SCORE,
};
pub use heatmap::{score_matrix, HeatmapCell, HeatmapRow};
