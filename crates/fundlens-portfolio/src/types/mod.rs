//! Core types for portfolio scoring.

mod config;
mod holding;
mod metric;
mod metric_row;
mod score;

pub use config::{BandThresholds, MissingMetricPolicy, ScoringConfig};
pub use holding::Holding;
pub use metric::{Metric, MetricFamily};
pub use metric_row::MetricRow;
pub use score::{PortfolioScore, ScoreBand};
