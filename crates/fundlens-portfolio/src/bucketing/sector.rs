//! Sector-based holdings distribution.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::Holding;

/// Holdings in one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorBucket {
    /// Sector name.
    pub sector: String,

    /// Number of holdings in this sector.
    pub count: usize,

    /// Summed allocation in percent, negatives counted as zero.
    pub allocation_pct: f64,
}

/// Distribution of holdings by sector.
///
/// Sectors keep the order in which they first appear in the holdings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectorDistribution {
    /// Buckets in first-seen order.
    pub sectors: Vec<SectorBucket>,

    /// Allocation of holdings without a sector.
    pub unclassified_pct: f64,
}

impl SectorDistribution {
    /// Returns the bucket for `sector`.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<&SectorBucket> {
        self.sectors.iter().find(|b| b.sector == sector)
    }

    /// Sector with the strictly greatest allocation; the first seen wins ties.
    ///
    /// `None` when no sector has a positive allocation.
    #[must_use]
    pub fn top_sector(&self) -> Option<&str> {
        let mut top: Option<&SectorBucket> = None;
        for bucket in &self.sectors {
            let best = top.map_or(0.0, |b| b.allocation_pct);
            if bucket.allocation_pct > best {
                top = Some(bucket);
            }
        }
        top.map(|b| b.sector.as_str())
    }

    /// Buckets sorted by allocation descending.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<&SectorBucket> {
        let mut result: Vec<&SectorBucket> = self.sectors.iter().collect();
        result.sort_by(|a, b| b.allocation_pct.total_cmp(&a.allocation_pct));
        result
    }
}

/// Groups holdings by sector.
///
/// Holdings with a missing or blank sector are counted in
/// `unclassified_pct` only.
#[must_use]
pub fn sector_allocation(holdings: &[Holding]) -> SectorDistribution {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut distribution = SectorDistribution::default();

    for holding in holdings {
        let weight = holding.effective_allocation();
        let Some(sector) = holding.sector_name() else {
            distribution.unclassified_pct += weight;
            continue;
        };
        let i = *index.entry(sector).or_insert_with(|| {
            distribution.sectors.push(SectorBucket {
                sector: sector.to_string(),
                count: 0,
                allocation_pct: 0.0,
            });
            distribution.sectors.len() - 1
        });
        let bucket = &mut distribution.sectors[i];
        bucket.count += 1;
        bucket.allocation_pct += weight;
    }

    distribution
}

/// Headline view of a fund's holdings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingsSummary {
    /// Sector with the greatest allocation.
    pub top_sector: Option<String>,

    /// Holdings with a non-negative allocation.
    pub asset_count: usize,

    /// Those holdings sorted by allocation, largest first.
    pub holdings: Vec<Holding>,
}

/// Summarizes holdings for display.
///
/// Holdings whose allocation is negative or not a number are left out of
/// the count and the list. Equal allocations keep their input order.
#[must_use]
pub fn summarize_holdings(holdings: &[Holding]) -> HoldingsSummary {
    let mut listed: Vec<Holding> = holdings
        .iter()
        .filter(|h| h.allocation_pct >= 0.0)
        .cloned()
        .collect();
    listed.sort_by(|a, b| b.allocation_pct.total_cmp(&a.allocation_pct));

    HoldingsSummary {
        top_sector: sector_allocation(holdings).top_sector().map(str::to_string),
        asset_count: listed.len(),
        holdings: listed,
    }
}
