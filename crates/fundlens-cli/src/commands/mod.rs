//! CLI command implementations.

pub mod align;
pub mod holdings;
pub mod score;

pub use align::AlignArgs;
pub use holdings::HoldingsArgs;
pub use score::ScoreArgs;

use std::path::Path;

use fundlens_core::{Date, RangeToken};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format (a time suffix is ignored).
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a range token, rejecting unknown tokens.
pub fn parse_range(s: &str) -> CliResult<RangeToken> {
    s.parse().map_err(|_| CliError::InvalidRange(s.to_string()))
}

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read input");
    serde_json::from_str(&content).map_err(|e| CliError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
