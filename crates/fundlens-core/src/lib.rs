//! # Fundlens Core
//!
//! Core types shared by the Fundlens fund analytics crates.
//!
//! This crate provides the foundational building blocks used throughout Fundlens:
//!
//! - **Dates**: a calendar-date newtype with clamping month/year arithmetic
//! - **Ranges**: `1M`/`6M`/`1Y`/`3Y`/`5Y`/`ALL` tokens and their alignment windows
//! - **Numerics**: rounding, clamping and division helpers that never yield `NaN`
//!
//! ## Example
//!
//! ```rust
//! use fundlens_core::prelude::*;
//!
//! let now = Date::from_ymd(2025, 3, 31).unwrap();
//! let window = RangeToken::OneMonth.window(now);
//! assert_eq!(window.cutoff, Date::from_ymd(2025, 2, 28).unwrap());
//! assert!(window.contains(now));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod numeric;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::numeric::{clamp_unit, mean, percent_change, round_to, safe_div};
    pub use crate::types::{AlignmentWindow, Date, RangeToken};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{AlignmentWindow, Date, RangeToken};
