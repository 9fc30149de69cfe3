//! Error taxonomy for the cataloger.
//!
//! Per-file failures (`ExtractError`) are recoverable: the dispatcher logs them
//! and moves on. Everything else is fatal to the operation that raised it.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while extracting endpoints from a single file.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Failure of a whole scan invocation.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("directory walk failed under {root}: {message}")]
    Walk { root: PathBuf, message: String },
}

/// Configuration and usage errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unsupported output format: {0} (expected json or html)")]
    UnsupportedFormat(String),
}

/// Failure persisting or loading a catalog.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("HTML rendering failed")]
    Render(#[from] std::fmt::Error),
}
