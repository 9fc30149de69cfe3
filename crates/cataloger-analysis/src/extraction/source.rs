//! Helpers shared by all extractors: reading sources, file metadata, entry ids.

use std::path::Path;

use cataloger_core::errors::ExtractError;
use chrono::{DateTime, Utc};
use xxhash_rust::xxh3::xxh3_64;

use crate::catalog::SourceMetadata;

/// Stable entry identifier derived from the path alone.
///
/// Content-free: the same path always yields the same id, even after edits.
pub fn entry_id(path: &Path) -> String {
    let hash = xxh3_64(path.to_string_lossy().as_bytes());
    format!("{hash:016x}")[..12].to_string()
}

/// Lowercased extension without the dot, or empty.
pub fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// Base file name, or empty.
pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

pub fn read_source(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))
}

/// File-level metadata common to every extractor.
pub fn base_metadata(path: &Path, team_owner: Option<&str>) -> SourceMetadata {
    let last_updated = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from);

    SourceMetadata {
        team_owner: team_owner.map(str::to_string),
        last_updated,
        source_file: path.display().to_string(),
        ..SourceMetadata::default()
    }
}
