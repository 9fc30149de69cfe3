//! Annotation extractor: decorator/annotation routes with their doc blocks.

pub mod languages;

use std::path::Path;
use std::sync::LazyLock;

use cataloger_core::errors::ExtractError;
use regex::{Regex, RegexBuilder};

pub use languages::Language;

use super::docs::{class_description, file_description, find_docs};
use super::patterns::{match_routes, RouteMatch};
use super::source::{base_metadata, entry_id, extension, file_name, read_source};
use super::Extractor;
use crate::catalog::{CatalogEntry, Endpoint};

/// Coarse markers of route annotations. One hit is enough to claim a file.
const INDICATORS: &[&str] = &[
    r"@\w+\.(get|post|put|delete|patch)\(",
    r"@(Get|Post|Put|Delete|Patch)Mapping",
    r"@RequestMapping",
    r"@(Get|Post|Put|Delete|Patch)\(",
    r"@Route\(",
    r"@Path\(",
    r"@api\.",
];

static INDICATOR_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    INDICATORS
        .iter()
        .filter_map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| tracing::error!(pattern, error = %e, "invalid indicator pattern"))
                .ok()
        })
        .collect()
});

pub struct AnnotationExtractor;

impl Extractor for AnnotationExtractor {
    fn name(&self) -> &str {
        "annotation"
    }

    fn recognizes(&self, path: &Path) -> bool {
        if Language::from_extension(&extension(path)).is_none() {
            return false;
        }
        match read_source(path) {
            Ok(content) => has_indicator(&content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unreadable source");
                false
            }
        }
    }

    fn extract(
        &self,
        path: &Path,
        team_owner: Option<&str>,
    ) -> Result<Option<CatalogEntry>, ExtractError> {
        let ext = extension(path);
        let Some(language) = Language::from_extension(&ext) else {
            return Ok(None);
        };
        let content = read_source(path)?;

        let endpoints = extract_endpoints(&content, &ext, language);
        if endpoints.is_empty() {
            return Ok(None);
        }

        let mut metadata = base_metadata(path, team_owner);
        metadata.title = Some(format!("API from {}", file_name(path)));
        metadata.description = class_description(&content).or_else(|| file_description(&content));

        Ok(Some(CatalogEntry {
            id: entry_id(path),
            metadata,
            endpoints,
        }))
    }
}

pub fn has_indicator(content: &str) -> bool {
    INDICATOR_REGEXES.iter().any(|re| re.is_match(content))
}

/// Apply the language's table and attach the docs preceding each match.
pub fn extract_endpoints(content: &str, extension: &str, language: Language) -> Vec<Endpoint> {
    match_routes(language.patterns(), content, extension)
        .into_iter()
        .map(|route| documented_endpoint(content, route))
        .collect()
}

fn documented_endpoint(content: &str, route: RouteMatch<'_>) -> Endpoint {
    let docs = find_docs(content, route.start);
    let mut endpoint = Endpoint::new(route.method, route.path);
    endpoint.summary = docs.summary;
    endpoint.description = docs.description;
    endpoint.tags = docs.tags;
    endpoint
}
