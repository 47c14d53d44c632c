//! Input records produced by the external fetch layer.
//!
//! Records carry ISO-8601 date strings and nullable values exactly as the
//! data service returns them. Converting them into [`Series`] is the only
//! step in this crate that can fail.

use std::collections::HashSet;

use fundlens_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{PerformanceError, PerformanceResult};
use crate::types::{Series, TimePoint};

/// Raw observation as received: `{"date": "2024-01-05T00:00:00", "value": 101.2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// ISO-8601 date or date-time.
    #[serde(alias = "markDate")]
    pub date: String,

    /// Observed value; `null` is skipped.
    #[serde(alias = "nav", default)]
    pub value: Option<f64>,
}

/// Raw series as received: `{"name": "...", "points": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Fund name.
    #[serde(alias = "MFName")]
    pub name: String,

    /// Observations in the order received.
    #[serde(alias = "graph", default)]
    pub points: Vec<PointRecord>,
}

impl TryFrom<SeriesRecord> for Series {
    type Error = PerformanceError;

    fn try_from(record: SeriesRecord) -> PerformanceResult<Self> {
        if record.name.trim().is_empty() {
            return Err(PerformanceError::invalid_series("series name is empty"));
        }

        let mut points = Vec::with_capacity(record.points.len());
        for point in &record.points {
            let date = Date::parse(&point.date)
                .map_err(|e| PerformanceError::invalid_point(&record.name, e.to_string()))?;
            if let Some(value) = point.value.filter(|v| v.is_finite()) {
                points.push(TimePoint::new(date, value));
            }
        }

        Ok(Series::from_points(record.name, points))
    }
}

/// Converts a request's worth of records into series.
///
/// # Errors
///
/// Fails on the first unparseable date, an empty name, or a name that
/// appears twice in `records`.
pub fn series_from_records(records: Vec<SeriesRecord>) -> PerformanceResult<Vec<Series>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut series = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.name.clone()) {
            return Err(PerformanceError::duplicate_series(record.name));
        }
        series.push(Series::try_from(record)?);
    }

    Ok(series)
}
