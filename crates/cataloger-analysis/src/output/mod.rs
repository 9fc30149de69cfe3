//! Catalog persistence: JSON documents and a standalone HTML page.

pub mod html;
pub mod json;

use std::path::Path;

use cataloger_core::config::OutputFormat;
use cataloger_core::errors::OutputError;

pub use html::render_html;
pub use json::{from_json, to_json};

use crate::catalog::Catalog;

/// Render `catalog` in `format` and write it to `path`, creating parent
/// directories as needed.
pub fn write_catalog(catalog: &Catalog, path: &Path, format: OutputFormat) -> Result<(), OutputError> {
    let rendered = match format {
        OutputFormat::Json => to_json(catalog)?,
        OutputFormat::Html => render_html(catalog)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, rendered).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), %format, endpoints = catalog.endpoint_count(), "catalog written");
    Ok(())
}

/// Read a JSON catalog written by [`write_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, OutputError> {
    let content = std::fs::read_to_string(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&content)
}
