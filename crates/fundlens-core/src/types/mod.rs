//! Domain types shared across Fundlens crates.
//!
//! - [`Date`]: calendar date with month/year arithmetic
//! - [`RangeToken`]: look-back period selector
//! - [`AlignmentWindow`]: the `[cutoff, now]` range a token resolves to

mod date;
mod range;

pub use date::Date;
pub use range::{AlignmentWindow, RangeToken};
