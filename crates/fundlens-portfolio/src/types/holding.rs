//! Fund holding with its allocation.

use serde::{Deserialize, Serialize};

/// One constituent of a fund portfolio.
///
/// `allocation_pct` is the share of the fund in percent. The same
/// identifier may appear more than once; allocations are summed when
/// scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Security identifier (ISIN or similar).
    pub identifier: String,

    /// Allocation in percent of the fund.
    pub allocation_pct: f64,

    /// Sector classification, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Display name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Holding {
    /// Creates a holding with no sector or name.
    #[must_use]
    pub fn new(identifier: impl Into<String>, allocation_pct: f64) -> Self {
        Self {
            identifier: identifier.into(),
            allocation_pct,
            sector: None,
            name: None,
        }
    }

    /// Sets the sector.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Allocation usable as a weight: negative and non-finite values count as zero.
    #[must_use]
    pub fn effective_allocation(&self) -> f64 {
        if self.allocation_pct.is_finite() && self.allocation_pct > 0.0 {
            self.allocation_pct
        } else {
            0.0
        }
    }

    /// Sector name, treating blank strings as unclassified.
    #[must_use]
    pub fn sector_name(&self) -> Option<&str> {
        self.sector
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
