//! Input records produced by the external fetch layer.
//!
//! Numbers may arrive as JSON numbers or as numeric strings. Converting
//! records into [`Holding`]s and [`MetricRow`]s fails only on a missing
//! identifier; bad values degrade to NaN instead.

use std::collections::BTreeMap;

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Holding, Metric, MetricRow};

/// A value that should be a number but may be text or anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// JSON number.
    Number(f64),
    /// Text such as `"12.5"` or `"12.5%"`.
    Text(String),
    /// Any other JSON value.
    Other(IgnoredAny),
}

impl RawNumber {
    /// Numeric value, NaN when not numeric.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            RawNumber::Number(v) => *v,
            RawNumber::Text(s) => s
                .trim()
                .trim_end_matches('%')
                .trim_end()
                .parse()
                .unwrap_or(f64::NAN),
            RawNumber::Other(_) => f64::NAN,
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawNumber>::deserialize(deserializer)?.map(|raw| raw.to_f64()))
}

/// Raw holding as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRecord {
    /// Security identifier.
    #[serde(alias = "isin", alias = "ISIN")]
    pub identifier: String,

    /// Allocation in percent; missing counts as zero.
    #[serde(
        rename = "allocationPercent",
        alias = "perc",
        default,
        deserialize_with = "lenient_number"
    )]
    pub allocation_pct: Option<f64>,

    /// Sector, if classified.
    #[serde(default)]
    pub sector: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl TryFrom<HoldingRecord> for Holding {
    type Error = PortfolioError;

    fn try_from(record: HoldingRecord) -> PortfolioResult<Self> {
        if record.identifier.trim().is_empty() {
            return Err(PortfolioError::invalid_holding(
                record.name.unwrap_or_default(),
                "identifier is empty",
            ));
        }
        Ok(Holding {
            identifier: record.identifier,
            allocation_pct: record.allocation_pct.unwrap_or(0.0),
            sector: record.sector,
            name: record.name,
        })
    }
}

/// Raw metric row as received.
///
/// Metric values may sit under `values` or directly on the record, as in
/// `{"ISIN": "...", "Symbol": "TCS", "PE": 31.2, "ROCE": "64.1"}`. When a
/// metric appears in both places, `values` wins.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricRecord {
    /// Security identifier.
    #[serde(alias = "ISIN", alias = "isin")]
    pub identifier: String,

    /// Ticker symbol.
    #[serde(alias = "Symbol", default)]
    pub symbol: Option<String>,

    /// Metric values keyed by code.
    #[serde(default)]
    pub values: BTreeMap<String, Option<RawNumber>>,

    /// Every other field on the record.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Option<RawNumber>>,
}

impl TryFrom<MetricRecord> for MetricRow {
    type Error = PortfolioError;

    fn try_from(record: MetricRecord) -> PortfolioResult<Self> {
        if record.identifier.trim().is_empty() {
            return Err(PortfolioError::invalid_metric_row(
                record.symbol.unwrap_or_default(),
                "identifier is empty",
            ));
        }

        let mut row = MetricRow::new(record.identifier);
        row.symbol = record.symbol;
        for (key, value) in record.extra.into_iter().chain(record.values) {
            let Ok(metric) = key.parse::<Metric>() else {
                debug!(identifier = %row.identifier, field = %key, "ignoring non-metric field");
                continue;
            };
            match value {
                Some(raw) => {
                    row.values.insert(metric, raw.to_f64());
                }
                None => {
                    row.values.remove(&metric);
                }
            }
        }
        Ok(row)
    }
}

/// Converts holding records.
///
/// # Errors
///
/// Fails on the first record with an empty identifier.
pub fn holdings_from_records(records: Vec<HoldingRecord>) -> PortfolioResult<Vec<Holding>> {
    records.into_iter().map(Holding::try_from).collect()
}

/// Converts metric records.
///
/// # Errors
///
/// Fails on the first record with an empty identifier.
pub fn metric_rows_from_records(records: Vec<MetricRecord>) -> PortfolioResult<Vec<MetricRow>> {
    records.into_iter().map(MetricRow::try_from).collect()
}
