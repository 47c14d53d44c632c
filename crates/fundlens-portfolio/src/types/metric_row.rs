//! Per-holding fundamental metric values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Metric;

/// Raw metric values for one security.
///
/// A metric absent from the map was not reported. A metric present with
/// a NaN value was reported but was not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Security identifier, matched against [`Holding::identifier`](super::Holding).
    pub identifier: String,

    /// Ticker symbol, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Raw values by metric.
    #[serde(default)]
    pub values: BTreeMap<Metric, f64>,
}

impl MetricRow {
    /// Creates a row with no values.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            symbol: None,
            values: BTreeMap::new(),
        }
    }

    /// Sets the ticker symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets a raw value.
    #[must_use]
    pub fn with_value(mut self, metric: Metric, raw: f64) -> Self {
        self.values.insert(metric, raw);
        self
    }

    /// Raw value for `metric`; `None` when not reported.
    #[must_use]
    pub fn raw(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    /// Label for display: the symbol, or `"N/A"`.
    #[must_use]
    pub fn label(&self) -> &str {
        self.symbol
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("N/A")
    }
}
