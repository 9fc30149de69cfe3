//! File walker using the `ignore` crate.
//!
//! Supports `.catalogignore` (gitignore syntax, hierarchical), optional
//! `.gitignore` handling, and a fixed list of dependency/build directories.

use std::path::{Path, PathBuf};

use cataloger_core::config::ScanConfig;
use cataloger_core::errors::ScanError;

/// Directory and file names pruned from every scan.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "target",
    ".next",
    ".nuxt",
    "__pycache__",
    ".pytest_cache",
    "coverage",
    ".nyc_output",
    "vendor",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    "bin",
    "obj",
];

/// Per-directory ignore file, honoured regardless of git settings.
pub const IGNORE_FILE_NAME: &str = ".catalogignore";

/// Walk `root` and return every regular file to consider, sorted by path.
///
/// Unreadable entries below the root are logged and skipped.
pub fn walk_directory(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    std::fs::read_dir(root).map_err(|e| ScanError::Walk {
        root: root.to_path_buf(),
        message: e.to_string(),
    })?;

    let gitignore = config.effective_respect_gitignore();
    let pruned: Vec<String> = DEFAULT_IGNORES
        .iter()
        .map(|name| name.to_string())
        .chain(config.extra_ignore.iter().cloned())
        .collect();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(true)
        .parents(gitignore)
        .ignore(false)
        .git_ignore(gitignore)
        .git_global(gitignore)
        .git_exclude(gitignore)
        .require_git(false)
        .add_custom_ignore_filename(IGNORE_FILE_NAME)
        .max_filesize(Some(config.effective_max_file_size()))
        .follow_links(config.effective_follow_symlinks())
        .filter_entry(move |entry| {
            entry.depth() == 0
                || !pruned
                    .iter()
                    .any(|name| entry.file_name().to_str() == Some(name.as_str()))
        });

    if !config.effective_recursive() {
        builder.max_depth(Some(1));
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
