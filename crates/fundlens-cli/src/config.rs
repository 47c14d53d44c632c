//! Optional TOML configuration.
//!
//! ```toml
//! [align]
//! decimal_places = 2
//! clip_to_now = true
//!
//! [scoring]
//! missing_metric_policy = "exclude"
//! parallel_threshold = 250
//!
//! [scoring.band_thresholds]
//! moderate = 0.4
//! strong = 0.7
//! ```

use std::path::Path;

use fundlens_performance::AlignConfig;
use fundlens_portfolio::ScoringConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CliError, CliResult};

/// Settings read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Series alignment settings.
    pub align: AlignConfig,
    /// Portfolio scoring settings.
    pub scoring: ScoringConfig,
}

impl FileConfig {
    /// Parses and validates a configuration file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        config
            .align
            .validate()
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Loads `path` if given and present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            Some(path) => {
                warn!(path = %path.display(), "configuration file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}
