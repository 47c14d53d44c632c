//! Domain types for performance alignment.
//!
//! - [`TimePoint`] / [`Series`]: raw NAV observations for one fund
//! - [`AlignedTable`] / [`AlignedRow`]: the normalized, date-keyed output
//! - [`PeriodReturn`]: per-series summary of the aligned window

mod series;
mod table;

pub use series::{Series, TimePoint};
pub use table::{AlignedRow, AlignedTable, PeriodReturn};
