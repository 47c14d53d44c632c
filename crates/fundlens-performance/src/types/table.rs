//! Aligned, normalized performance table.

use fundlens_core::Date;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// One row of the aligned table.
///
/// `values` is positional: `values[i]` belongs to the `i`-th name in
/// [`AlignedTable::series`]. A `None` cell means the series has no
/// observation on this date (or no usable base value).
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    /// Row date (unique within a table).
    pub date: Date,
    /// Percentage change from base, per series.
    pub values: Vec<Option<f64>>,
}

impl AlignedRow {
    /// Returns the `YYYY-MM-DD` key used for this row.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date.to_string()
    }
}

/// Return over the aligned window for a single series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReturn {
    /// Series name.
    pub series: String,
    /// Date of the base (0%) observation.
    pub start: Option<Date>,
    /// Date of the last populated cell.
    pub end: Option<Date>,
    /// Percentage change at `end`.
    pub return_pct: Option<f64>,
}

/// Date-indexed table of percentage returns across several series.
///
/// Rows are sorted ascending by date and dates are unique.
///
/// Serializes as a list of flat objects:
/// `[{"date": "2025-01-02", "Alpha": 0.0, "Beta": null}, ...]`.
/// A series literally named `date` would shadow the date key in that form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedTable {
    series: Vec<String>,
    rows: Vec<AlignedRow>,
}

impl AlignedTable {
    pub(crate) fn new(series: Vec<String>, rows: Vec<AlignedRow>) -> Self {
        Self { series, rows }
    }

    /// Series names in column order.
    #[must_use]
    pub fn series(&self) -> &[String] {
        &self.series
    }

    /// Rows in ascending date order.
    #[must_use]
    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.rows.iter().map(|r| r.date).collect()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.series.iter().position(|s| s == name)
    }

    /// Returns all cells for a series, or `None` if the series is unknown.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.index_of(name)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }

    /// Returns the cell for `name` on `date`, if populated.
    #[must_use]
    pub fn cell(&self, date: Date, name: &str) -> Option<f64> {
        let idx = self.index_of(name)?;
        let pos = self.rows.binary_search_by_key(&date, |r| r.date).ok()?;
        self.rows[pos].values[idx]
    }

    /// Summarizes each series by its last populated cell.
    #[must_use]
    pub fn period_returns(&self) -> Vec<PeriodReturn> {
        self.series
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let mut populated = self
                    .rows
                    .iter()
                    .filter_map(|r| r.values[idx].map(|v| (r.date, v)));
                let first = populated.next();
                let last = populated.last().or(first);

                PeriodReturn {
                    series: name.clone(),
                    start: first.map(|(date, _)| date),
                    end: last.map(|(date, _)| date),
                    return_pct: last.map(|(_, value)| value),
                }
            })
            .collect()
    }
}

struct RowView<'a> {
    series: &'a [String],
    row: &'a AlignedRow,
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len() + 1))?;
        map.serialize_entry("date", &self.row.date)?;
        for (name, value) in self.series.iter().zip(&self.row.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for AlignedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowView {
                series: &self.series,
                row,
            })?;
        }
        seq.end()
    }
}
