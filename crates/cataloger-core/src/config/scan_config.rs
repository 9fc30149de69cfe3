//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Files larger than this are skipped by the walker unless overridden.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Options controlling how a directory scan is performed.
///
/// Every field is optional so that a partial `[scan]` table merges cleanly with
/// command-line overrides; use the `effective_*` accessors to read values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Descend into subdirectories. Defaults to true.
    pub recursive: Option<bool>,
    /// Additional directory or file names to prune, on top of the defaults.
    pub extra_ignore: Vec<String>,
    /// Honour `.gitignore` files. Defaults to false.
    pub respect_gitignore: Option<bool>,
    /// Follow symbolic links. Defaults to false.
    pub follow_symlinks: Option<bool>,
    /// Maximum file size in bytes.
    pub max_file_size: Option<u64>,
    /// Owning team stamped on every produced entry.
    pub team_owner: Option<String>,
}

impl ScanConfig {
    pub fn effective_recursive(&self) -> bool {
        self.recursive.unwrap_or(true)
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(false)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
