//! # Fundlens Performance
//!
//! Builds comparable performance charts across funds with heterogeneous
//! date coverage.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: alignment is stateless with explicit inputs (`now` included)
//! - **Degrade, don't fail**: missing data and zero bases become `None` cells
//! - **Strict ingestion**: only record-to-series conversion returns errors
//!
//! ## Pipeline
//!
//! 1. Resolve the [`RangeToken`](fundlens_core::RangeToken) to a cutoff date
//! 2. Keep each series' in-window points, keyed by calendar date (last write wins)
//! 3. Union the dates of every series and sort them ascending
//! 4. Take each series' first in-window value as its base
//! 5. Express every cell as percentage change from that base, rounded
//!
//! ## Quick Start
//!
//! ```rust
//! use fundlens_core::{Date, RangeToken};
//! use fundlens_performance::prelude::*;
//!
//! let records: Vec<SeriesRecord> = serde_json::from_str(r#"[
//!     {"name": "Alpha", "points": [
//!         {"date": "2025-01-02T00:00:00", "value": 100.0},
//!         {"date": "2025-01-03T00:00:00", "value": 104.0}
//!     ]}
//! ]"#).unwrap();
//!
//! let series = series_from_records(records).unwrap();
//! let now = Date::from_ymd(2025, 1, 31).unwrap();
//! let table = align_series(&series, RangeToken::OneMonth, now);
//!
//! assert_eq!(table.column("Alpha").unwrap(), vec![Some(0.0), Some(4.0)]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod align;
pub mod config;
pub mod error;
pub mod record;
pub mod types;

pub use align::{align_series, SeriesAligner};
pub use config::AlignConfig;
pub use error::{PerformanceError, PerformanceResult};
pub use record::{series_from_records, PointRecord, SeriesRecord};
pub use types::{AlignedRow, AlignedTable, PeriodReturn, Series, TimePoint};

/// Prelude module for convenient imports.
///
/// ```rust
/// use fundlens_performance::prelude::*;
/// ```
pub mod prelude {
    pub use crate::align::{align_series, SeriesAligner};
    pub use crate::config::AlignConfig;
    pub use crate::error::{PerformanceError, PerformanceResult};
    pub use crate::record::{series_from_records, PointRecord, SeriesRecord};
    pub use crate::types::{AlignedRow, AlignedTable, PeriodReturn, Series, TimePoint};

    pub use fundlens_core::{Date, RangeToken};
}
