//! Holdings classification.
//!
//! All functions are pure - they take holdings and return distributions
//! without modifying state.

mod sector;

pub use sector::*;
