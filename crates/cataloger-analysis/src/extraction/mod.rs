//! Endpoint extractors and the first-match-wins dispatcher.

pub mod annotation;
pub mod controller;
pub mod docs;
pub mod openapi;
pub mod patterns;
pub mod source;

use std::path::Path;

use cataloger_core::errors::ExtractError;

use crate::catalog::CatalogEntry;

pub use annotation::AnnotationExtractor;
pub use controller::ControllerExtractor;
pub use openapi::OpenApiExtractor;

/// A strategy for turning one file into a catalog entry.
pub trait Extractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Whether this extractor claims the file. Never fails: anything that
    /// prevents a decision counts as "no".
    fn recognizes(&self, path: &Path) -> bool;

    /// Extract the file. `Ok(None)` when nothing was found.
    fn extract(
        &self,
        path: &Path,
        team_owner: Option<&str>,
    ) -> Result<Option<CatalogEntry>, ExtractError>;
}

/// Ordered list of extractors.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    /// Built-in extractors in priority order: API description documents, routing files,
    /// annotated sources.
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(OpenApiExtractor),
                Box::new(ControllerExtractor),
                Box::new(AnnotationExtractor),
            ],
        }
    }

    pub fn with_extractors(extractors: Vec<Box<dyn Extractor>>) -> Self {
        Self { extractors }
    }

    pub fn names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Hand the file to the first extractor that recognizes it.
    ///
    /// Later extractors are never consulted once one has claimed the file,
    /// even if it produced nothing. Extraction errors are logged and turn
    /// into `None`.
    pub fn dispatch(&self, path: &Path, team_owner: Option<&str>) -> Option<CatalogEntry> {
        let extractor = self.extractors.iter().find(|e| e.recognizes(path))?;
        tracing::debug!(path = %path.display(), extractor = extractor.name(), "recognized");

        match extractor.extract(path, team_owner) {
            Ok(Some(entry)) if !entry.endpoints.is_empty() => {
                tracing::info!(
                    path = %path.display(),
                    extractor = extractor.name(),
                    endpoints = entry.endpoints.len(),
                    "extracted"
                );
                Some(entry)
            }
            Ok(_) => {
                tracing::debug!(path = %path.display(), extractor = extractor.name(), "no endpoints");
                None
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), extractor = extractor.name(), error = %e, "extraction failed");
                None
            }
        }
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
