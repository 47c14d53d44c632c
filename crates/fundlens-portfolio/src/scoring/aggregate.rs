//! Allocation-weighted aggregation of metric scores.
//!
//! The denominator is always the total allocation of the holdings, so a
//! metric row without a matching holding adds nothing to any score.

use std::collections::{BTreeMap, HashMap};

use fundlens_core::numeric::{clamp_unit, mean, safe_div};
use tracing::{debug, warn};

use super::curve::ScoreTable;
use super::heatmap::{heatmap_row, HeatmapRow};
use crate::types::{Holding, Metric, MetricRow, MissingMetricPolicy, PortfolioScore, ScoringConfig};

const METRIC_COUNT: usize = Metric::ALL.len();

/// Allocation per identifier, duplicates summed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationMap {
    weights: HashMap<String, f64>,
    total: f64,
}

impl AllocationMap {
    /// Summed allocation for `identifier`.
    #[must_use]
    pub fn weight(&self, identifier: &str) -> Option<f64> {
        self.weights.get(identifier).copied()
    }

    /// Sum of all allocations.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if there are no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Sums allocations by identifier.
///
/// Negative and non-finite allocations count as zero.
#[must_use]
pub fn aggregate_allocations(holdings: &[Holding]) -> AllocationMap {
    let mut map = AllocationMap::default();
    for holding in holdings {
        let weight = holding.effective_allocation();
        if weight != holding.allocation_pct {
            warn!(
                identifier = %holding.identifier,
                allocation = holding.allocation_pct,
                "unusable allocation counted as zero"
            );
        }
        *map.weights.entry(holding.identifier.clone()).or_insert(0.0) += weight;
        map.total += weight;
    }
    map
}

#[derive(Debug, Clone)]
struct MetricSums {
    weighted: [f64; METRIC_COUNT],
    contributors: [usize; METRIC_COUNT],
    unmatched: usize,
}

impl MetricSums {
    fn new() -> Self {
        Self {
            weighted: [0.0; METRIC_COUNT],
            contributors: [0; METRIC_COUNT],
            unmatched: 0,
        }
    }

    fn add_row(mut self, row: &MetricRow, allocations: &AllocationMap, table: &ScoreTable) -> Self {
        let weight = match allocations.weight(&row.identifier) {
            Some(w) if w > 0.0 => w,
            _ => {
                self.unmatched += 1;
                return self;
            }
        };
        for metric in Metric::ALL {
            if let Some(raw) = row.raw(metric) {
                let i = metric.index();
                self.weighted[i] += weight * table.normalize(metric, raw);
                self.contributors[i] += 1;
            }
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for i in 0..METRIC_COUNT {
            self.weighted[i] += other.weighted[i];
            self.contributors[i] += other.contributors[i];
        }
        self.unmatched += other.unmatched;
        self
    }
}

/// Last row per identifier, in first-seen order.
fn dedupe_rows(rows: &[MetricRow]) -> Vec<&MetricRow> {
    let mut position: HashMap<&str, usize> = HashMap::with_capacity(rows.len());
    let mut unique: Vec<&MetricRow> = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(&i) = position.get(row.identifier.as_str()) {
            warn!(identifier = %row.identifier, "duplicate metric row, keeping the later one");
            unique[i] = row;
        } else {
            position.insert(row.identifier.as_str(), unique.len());
            unique.push(row);
        }
    }
    unique
}

/// Scores portfolios against a [`ScoreTable`].
///
/// # Example
///
/// ```rust
/// use fundlens_portfolio::prelude::*;
///
/// let rows = vec![MetricRow::new("A").with_value(Metric::PriceEarnings, 30.0)];
/// let holdings = vec![Holding::new("A", 10.0)];
///
/// let score = MetricScorer::default().score(&rows, &holdings);
/// assert_eq!(score.get(Metric::PriceEarnings), Some(0.5));
/// ```
#[derive(Debug, Clone)]
pub struct MetricScorer<'a> {
    table: &'a ScoreTable,
    config: ScoringConfig,
}

impl Default for MetricScorer<'static> {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl MetricScorer<'static> {
    /// Scorer using the standard table.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            table: ScoreTable::standard(),
            config,
        }
    }
}

impl<'a> MetricScorer<'a> {
    /// Scorer using a custom table.
    #[must_use]
    pub fn with_table(table: &'a ScoreTable, config: ScoringConfig) -> Self {
        Self { table, config }
    }

    /// The scoring configuration.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The normalizer table.
    #[must_use]
    pub fn table(&self) -> &ScoreTable {
        self.table
    }

    /// Allocation-weighted score per metric plus the overall mean.
    ///
    /// Every score is `None` when there are no holdings or their total
    /// allocation is zero. Rows whose identifier matches no holding are
    /// skipped; when an identifier has several rows the last one is used.
    #[must_use]
    pub fn score(&self, rows: &[MetricRow], holdings: &[Holding]) -> PortfolioScore {
        let allocations = aggregate_allocations(holdings);
        if allocations.is_empty() || allocations.total() <= 0.0 {
            debug!(holdings = holdings.len(), "no allocation to weight by");
            return PortfolioScore::empty();
        }

        let unique = dedupe_rows(rows);
        let sums = self.sum_rows(&unique, &allocations);
        if sums.unmatched > 0 {
            warn!(unmatched = sums.unmatched, "metric rows without a holding skipped");
        }

        let total = allocations.total();
        let per_metric = Metric::ALL
            .into_iter()
            .map(|metric| {
                let i = metric.index();
                let score = match self.config.missing_metric_policy {
                    MissingMetricPolicy::Exclude if sums.contributors[i] == 0 => None,
                    _ => safe_div(sums.weighted[i], total).map(clamp_unit),
                };
                (metric, score)
            })
            .collect::<BTreeMap<_, _>>();
        let overall = mean(per_metric.values().filter_map(|s| *s));

        debug!(
            rows = unique.len(),
            holdings = allocations.len(),
            total_allocation = total,
            overall = ?overall,
            "portfolio scored"
        );

        PortfolioScore {
            per_metric,
            overall,
        }
    }

    /// Per-row score matrix for heatmap display.
    #[must_use]
    pub fn score_matrix(&self, rows: &[MetricRow]) -> Vec<HeatmapRow> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if self.config.should_parallelize(rows.len()) {
                return rows.par_iter().map(|row| heatmap_row(row, self.table)).collect();
            }
        }

        rows.iter().map(|row| heatmap_row(row, self.table)).collect()
    }

    /// Weighted score sums over deduplicated rows. Splits across rayon
    /// workers once the row count reaches the configured threshold.
    fn sum_rows(&self, rows: &[&MetricRow], allocations: &AllocationMap) -> MetricSums {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if self.config.should_parallelize(rows.len()) {
                return rows
                    .par_iter()
                    .fold(MetricSums::new, |acc, row| acc.add_row(row, allocations, self.table))
                    .reduce(MetricSums::new, MetricSums::merge);
            }
        }

        rows.iter()
            .fold(MetricSums::new(), |acc, row| acc.add_row(row, allocations, self.table))
    }
}
