//! The fixed set of fundamental metrics scored for equity holdings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Fundamental metric reported per equity holding.
///
/// Serialized names are the short column codes used by the metric feed
/// (`PE`, `ROCE`, ...). Ordering follows the canonical presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    /// Price to earnings ratio. Lower is better.
    #[serde(rename = "PE")]
    PriceEarnings,
    /// Return on capital employed, percent.
    #[serde(rename = "ROCE")]
    ReturnOnCapitalEmployed,
    /// Return on equity, percent.
    #[serde(rename = "ROE")]
    ReturnOnEquity,
    /// Promoter holding, percent of shares.
    #[serde(rename = "PromHold")]
    PromoterHolding,
    /// Sales growth variance, percent.
    #[serde(rename = "Salesvar")]
    SalesVariance,
    /// Profit growth variance, percent.
    #[serde(rename = "ProfitVar")]
    ProfitVariance,
    /// Operating profit margin, percent.
    #[serde(rename = "OPM")]
    OperatingMargin,
    /// Cash return on invested capital, percent.
    #[serde(rename = "CROIC")]
    CashReturnOnInvestedCapital,
}

/// How a metric's raw value maps to quality.
///
/// Metrics in the same family share a score curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFamily {
    /// Lower is better (PE).
    Valuation,
    /// Return ratios, higher is better (ROCE, ROE, OPM, CROIC).
    ReturnOnCapital,
    /// Promoter ownership share, higher is better (PromHold).
    PromoterHolding,
    /// Growth variance, higher is better (Salesvar, ProfitVar).
    GrowthVariance,
}

impl Metric {
    /// All metrics in presentation order.
    pub const ALL: [Metric; 8] = [
        Metric::PriceEarnings,
        Metric::ReturnOnCapitalEmployed,
        Metric::ReturnOnEquity,
        Metric::PromoterHolding,
        Metric::SalesVariance,
        Metric::ProfitVariance,
        Metric::OperatingMargin,
        Metric::CashReturnOnInvestedCapital,
    ];

    /// Column code as it appears in metric rows.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Metric::PriceEarnings => "PE",
            Metric::ReturnOnCapitalEmployed => "ROCE",
            Metric::ReturnOnEquity => "ROE",
            Metric::PromoterHolding => "PromHold",
            Metric::SalesVariance => "Salesvar",
            Metric::ProfitVariance => "ProfitVar",
            Metric::OperatingMargin => "OPM",
            Metric::CashReturnOnInvestedCapital => "CROIC",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Metric::PriceEarnings => "Price / Earnings",
            Metric::ReturnOnCapitalEmployed => "Return on Capital Employed",
            Metric::ReturnOnEquity => "Return on Equity",
            Metric::PromoterHolding => "Promoter Holding",
            Metric::SalesVariance => "Sales Variance",
            Metric::ProfitVariance => "Profit Variance",
            Metric::OperatingMargin => "Operating Margin",
            Metric::CashReturnOnInvestedCapital => "Cash ROIC",
        }
    }

    /// Returns the curve family for this metric.
    #[must_use]
    pub const fn family(self) -> MetricFamily {
        match self {
            Metric::PriceEarnings => MetricFamily::Valuation,
            Metric::ReturnOnCapitalEmployed
            | Metric::ReturnOnEquity
            | Metric::OperatingMargin
            | Metric::CashReturnOnInvestedCapital => MetricFamily::ReturnOnCapital,
            Metric::PromoterHolding => MetricFamily::PromoterHolding,
            Metric::SalesVariance | Metric::ProfitVariance => MetricFamily::GrowthVariance,
        }
    }

    /// Position within [`Metric::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = PortfolioError;

    /// Parses a column code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Metric::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PortfolioError::unknown_metric(trimmed))
    }
}
