//! Layered configuration: TOML file, then command-line overrides.

mod output_config;
mod scan_config;

pub use output_config::{OutputConfig, OutputFormat};
pub use scan_config::{ScanConfig, DEFAULT_MAX_FILE_SIZE};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Name of the per-project config file looked up in the scan root.
pub const CONFIG_FILE_NAME: &str = ".api-cataloger.toml";

/// Top-level cataloger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogerConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

impl CatalogerConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration for a scan rooted at `root`.
    ///
    /// An explicit path must exist. Without one, `<root>/.api-cataloger.toml`
    /// is used when present, otherwise defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let base = if root.is_file() {
                    root.parent().unwrap_or(root)
                } else {
                    root
                };
                let candidate = base.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    tracing::debug!(root = %root.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml(&content)
    }
}
