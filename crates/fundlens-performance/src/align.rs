//! Multi-series date alignment and percentage-return normalization.
//!
//! Given several fund histories with different date coverage, the aligner
//! builds one ascending date index from the union of every series' in-window
//! dates and expresses each series as the percentage change from its own
//! first in-window observation.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use fundlens_core::numeric::{percent_change, round_to};
use fundlens_core::{AlignmentWindow, Date, RangeToken};
use tracing::{debug, warn};

use crate::config::AlignConfig;
use crate::types::{AlignedRow, AlignedTable, Series};

/// Aligns named series onto a shared date index.
///
/// The aligner is stateless apart from its configuration and can be shared
/// freely across threads.
///
/// # Example
///
/// ```rust
/// use fundlens_core::{Date, RangeToken};
/// use fundlens_performance::{AlignConfig, Series, SeriesAligner};
///
/// let d = |m, day| Date::from_ymd(2025, m, day).unwrap();
/// let alpha = Series::new("Alpha").with_point(d(1, 2), 100.0).with_point(d(1, 3), 110.0);
/// let beta = Series::new("Beta").with_point(d(1, 3), 50.0).with_point(d(1, 6), 55.0);
///
/// let aligner = SeriesAligner::new(AlignConfig::default());
/// let table = aligner.align(&[alpha, beta], RangeToken::All, d(1, 31));
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.column("Alpha").unwrap(), vec![Some(0.0), Some(10.0), None]);
/// assert_eq!(table.column("Beta").unwrap(), vec![None, Some(0.0), Some(10.0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesAligner {
    config: AlignConfig,
}

impl SeriesAligner {
    /// Creates an aligner with the given configuration.
    #[must_use]
    pub fn new(config: AlignConfig) -> Self {
        Self { config }
    }

    /// Returns the aligner configuration.
    #[must_use]
    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Aligns `series` over the window selected by `range`, relative to `now`.
    ///
    /// Each cell is `round(((value - base) / base) * 100, decimal_places)`,
    /// where `base` is the series' value on its earliest in-window date.
    /// Cells are `None` when the series has no observation on that row's
    /// date, or when its base is zero. There is no forward-fill.
    ///
    /// If two series share a name, the later one replaces the earlier one.
    #[must_use]
    pub fn align(&self, series: &[Series], range: RangeToken, now: Date) -> AlignedTable {
        let window = range.window(now);

        let mut names: Vec<String> = Vec::with_capacity(series.len());
        let mut columns: Vec<BTreeMap<Date, f64>> = Vec::with_capacity(series.len());
        let mut positions: HashMap<&str, usize> = HashMap::with_capacity(series.len());

        for s in series {
            let column = self.in_window_values(s, &window);
            if let Some(&idx) = positions.get(s.name.as_str()) {
                warn!(series = %s.name, "duplicate series name, keeping the later series");
                columns[idx] = column;
            } else {
                positions.insert(s.name.as_str(), names.len());
                names.push(s.name.clone());
                columns.push(column);
            }
        }

        // Union across every series so the window starts at the earliest
        // date any series has, not just the first one.
        let dates: BTreeSet<Date> = columns
            .iter()
            .flat_map(|column| column.keys().copied())
            .collect();

        // BTreeMap iteration is date-ordered, so the first entry is the base.
        let bases: Vec<Option<f64>> = columns
            .iter()
            .map(|column| column.values().next().copied())
            .collect();

        let places = self.config.decimal_places;
        let rows: Vec<AlignedRow> = dates
            .into_iter()
            .map(|date| AlignedRow {
                date,
                values: columns
                    .iter()
                    .zip(&bases)
                    .map(|(column, base)| {
                        let value = column.get(&date)?;
                        let base = (*base)?;
                        percent_change(*value, base).map(|pct| round_to(pct, places))
                    })
                    .collect(),
            })
            .collect();

        debug!(
            series = names.len(),
            rows = rows.len(),
            range = %range,
            cutoff = %window.cutoff,
            "aligned performance series"
        );

        AlignedTable::new(names, rows)
    }

    /// Keeps in-window, finite observations keyed by date.
    /// Later points overwrite earlier ones that share a date.
    fn in_window_values(&self, series: &Series, window: &AlignmentWindow) -> BTreeMap<Date, f64> {
        let mut column = BTreeMap::new();
        for point in &series.points {
            if !point.value.is_finite() {
                continue;
            }
            let in_window = if self.config.clip_to_now {
                window.contains(point.date)
            } else {
                point.date >= window.cutoff
            };
            if in_window {
                column.insert(point.date, point.value);
            }
        }
        column
    }
}

/// Aligns `series` with the default configuration.
///
/// See [`SeriesAligner::align`].
#[must_use]
pub fn align_series(series: &[Series], range: RangeToken, now: Date) -> AlignedTable {
    SeriesAligner::default().align(series, range, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let table = align_series(&[], RangeToken::OneYear, d(2025, 6, 1));
        assert!(table.is_empty());
        assert!(table.series().is_empty());
    }

    #[test]
    fn test_first_cell_is_zero() {
        let s = Series::new("A")
            .with_point(d(2025, 5, 2), 250.0)
            .with_point(d(2025, 5, 1), 200.0);
        let table = align_series(&[s], RangeToken::OneMonth, d(2025, 5, 20));

        assert_eq!(table.column("A").unwrap(), vec![Some(0.0), Some(25.0)]);
    }

    #[test]
    fn test_cutoff_excludes_older_points_and_rebases() {
        let s = Series::new("A")
            .with_point(d(2025, 3, 1), 50.0)
            .with_point(d(2025, 5, 15), 100.0)
            .with_point(d(2025, 6, 1), 105.0);
        let table = align_series(&[s], RangeToken::OneMonth, d(2025, 6, 10));

        assert_eq!(table.dates(), vec![d(2025, 5, 15), d(2025, 6, 1)]);
        assert_eq!(table.column("A").unwrap(), vec![Some(0.0), Some(5.0)]);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let s = Series::new("A")
            .with_point(d(2025, 5, 10), 100.0)
            .with_point(d(2025, 5, 9), 1.0);
        let table = align_series(&[s], RangeToken::OneMonth, d(2025, 6, 10));

        assert_eq!(table.dates(), vec![d(2025, 5, 10)]);
    }

    #[test]
    fn test_same_date_last_write_wins() {
        let s = Series::new("A")
            .with_point(d(2025, 1, 1), 100.0)
            .with_point(d(2025, 1, 2), 120.0)
            .with_point(d(2025, 1, 1), 80.0);
        let table = align_series(&[s], RangeToken::All, d(2025, 2, 1));

        assert_eq!(table.len(), 2);
        assert_eq!(table.column("A").unwrap(), vec![Some(0.0), Some(50.0)]);
    }

    #[test]
    fn test_zero_base_yields_nulls() {
        let s = Series::new("Z")
            .with_point(d(2025, 1, 1), 0.0)
            .with_point(d(2025, 1, 2), 10.0);
        let table = align_series(&[s], RangeToken::All, d(2025, 2, 1));

        assert_eq!(table.column("Z").unwrap(), vec![None, None]);
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let s = Series::new("A")
            .with_point(d(2025, 1, 1), f64::NAN)
            .with_point(d(2025, 1, 2), 100.0)
            .with_point(d(2025, 1, 3), f64::INFINITY)
            .with_point(d(2025, 1, 4), 90.0);
        let table = align_series(&[s], RangeToken::All, d(2025, 2, 1));

        assert_eq!(table.dates(), vec![d(2025, 1, 2), d(2025, 1, 4)]);
        assert_eq!(table.column("A").unwrap(), vec![Some(0.0), Some(-10.0)]);
    }

    #[test]
    fn test_series_outside_window_is_all_null() {
        let inside = Series::new("In").with_point(d(2025, 6, 1), 10.0);
        let outside = Series::new("Out").with_point(d(2020, 1, 1), 10.0);
        let table = align_series(&[inside, outside], RangeToken::OneYear, d(2025, 6, 5));

        assert_eq!(table.series(), &["In".to_string(), "Out".to_string()]);
        assert_eq!(table.column("Out").unwrap(), vec![None]);
    }

    #[test]
    fn test_future_points_clipped_by_default() {
        let s = Series::new("A")
            .with_point(d(2025, 6, 1), 100.0)
            .with_point(d(2025, 6, 20), 150.0);

        let clipped = align_series(&[s.clone()], RangeToken::OneYear, d(2025, 6, 10));
        assert_eq!(clipped.dates(), vec![d(2025, 6, 1)]);

        let aligner = SeriesAligner::new(AlignConfig::new().with_clip_to_now(false));
        let unclipped = aligner.align(&[s], RangeToken::OneYear, d(2025, 6, 10));
        assert_eq!(unclipped.dates(), vec![d(2025, 6, 1), d(2025, 6, 20)]);
    }

    #[test]
    fn test_rounding_to_configured_places() {
        let s = Series::new("A")
            .with_point(d(2025, 1, 1), 3.0)
            .with_point(d(2025, 1, 2), 4.0);

        let two = align_series(&[s.clone()], RangeToken::All, d(2025, 2, 1));
        assert_relative_eq!(two.cell(d(2025, 1, 2), "A").unwrap(), 33.33);

        let aligner = SeriesAligner::new(AlignConfig::new().with_decimal_places(4));
        let four = aligner.align(&[s], RangeToken::All, d(2025, 2, 1));
        assert_relative_eq!(four.cell(d(2025, 1, 2), "A").unwrap(), 33.3333);
    }

    #[test]
    fn test_excess_precision_keeps_first_cell_zero() {
        let s = Series::new("A")
            .with_point(d(2025, 1, 1), 100.0)
            .with_point(d(2025, 1, 2), 110.0);
        let config = AlignConfig {
            decimal_places: 400,
            ..AlignConfig::default()
        };

        let table = SeriesAligner::new(config).align(&[s], RangeToken::All, d(2025, 2, 1));
        let column = table.column("A").unwrap();

        assert_eq!(column[0], Some(0.0));
        assert_relative_eq!(column[1].unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_duplicate_names_keep_later_series() {
        let first = Series::new("A").with_point(d(2025, 1, 1), 100.0);
        let second = Series::new("A")
            .with_point(d(2025, 1, 5), 10.0)
            .with_point(d(2025, 1, 6), 11.0);
        let table = align_series(&[first, second], RangeToken::All, d(2025, 2, 1));

        assert_eq!(table.series(), &["A".to_string()]);
        assert_eq!(table.dates(), vec![d(2025, 1, 5), d(2025, 1, 6)]);
        assert_eq!(table.column("A").unwrap(), vec![Some(0.0), Some(10.0)]);
    }
}
