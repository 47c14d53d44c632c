//! Per-holding score matrix.

use serde::Serialize;

use super::curve::ScoreTable;
use crate::types::{Metric, MetricRow};

/// One metric for one holding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    /// The metric.
    pub metric: Metric,
    /// Raw value as reported; NaN when not numeric, `None` when unreported.
    pub raw: Option<f64>,
    /// Normalized score.
    pub score: f64,
}

/// Scores for one holding, one cell per metric in [`Metric::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    /// Security identifier.
    pub identifier: String,
    /// Ticker symbol or `"N/A"`.
    pub label: String,
    /// Cells in metric order.
    pub cells: Vec<HeatmapCell>,
}

impl HeatmapRow {
    /// Cell for `metric`.
    #[must_use]
    pub fn cell(&self, metric: Metric) -> Option<&HeatmapCell> {
        self.cells.iter().find(|c| c.metric == metric)
    }
}

pub(crate) fn heatmap_row(row: &MetricRow, table: &ScoreTable) -> HeatmapRow {
    let cells = Metric::ALL
        .into_iter()
        .map(|metric| {
            let raw = row.raw(metric);
            // Unreported metrics are coloured as a raw zero.
            let score = table.normalize(metric, raw.unwrap_or(0.0));
            HeatmapCell { metric, raw, score }
        })
        .collect();

    HeatmapRow {
        identifier: row.identifier.clone(),
        label: row.label().to_string(),
        cells,
    }
}

/// Scores every metric of every row. Unreported metrics score as a raw
/// value of zero; non-numeric ones score neutral.
#[must_use]
pub fn score_matrix(rows: &[MetricRow], table: &ScoreTable) -> Vec<HeatmapRow> {
    rows.iter().map(|row| heatmap_row(row, table)).collect()
}
