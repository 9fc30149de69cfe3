//! Controller extractor: routing files of web frameworks.
//!
//! Recognition is purely name-based (`*controller*`, `*routes*`, ...). The
//! content only decides which framework's pattern table is applied.

pub mod frameworks;

use std::path::Path;

use cataloger_core::errors::ExtractError;

pub use frameworks::Framework;

use super::docs::file_description;
use super::patterns::{match_routes, RouteMatch};
use super::source::{base_metadata, entry_id, extension, file_name, read_source};
use super::Extractor;
use crate::catalog::{CatalogEntry, Endpoint, EndpointStatus};

/// Source extensions the controller extractor handles.
const SOURCE_EXTENSIONS: &[&str] = &["py", "js", "ts", "java", "kt", "rb", "go"];

/// File-name fragments that mark a routing file.
const ROUTING_KEYWORDS: &[&str] = &["controller", "route", "handler", "endpoint", "api"];

pub struct ControllerExtractor;

impl Extractor for ControllerExtractor {
    fn name(&self) -> &str {
        "controller"
    }

    fn recognizes(&self, path: &Path) -> bool {
        if !SOURCE_EXTENSIONS.contains(&extension(path).as_str()) {
            return false;
        }
        let name = file_name(path).to_lowercase();
        ROUTING_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }

    fn extract(
        &self,
        path: &Path,
        team_owner: Option<&str>,
    ) -> Result<Option<CatalogEntry>, ExtractError> {
        let content = read_source(path)?;
        let ext = extension(path);
        let framework = Framework::detect(&content, &ext);
        tracing::debug!(path = %path.display(), %framework, "detected framework");

        let endpoints = extract_endpoints(&content, &ext, framework);
        if endpoints.is_empty() {
            return Ok(None);
        }

        let mut metadata = base_metadata(path, team_owner);
        metadata.title = Some(format!("API from {}", file_name(path)));
        metadata.description = file_description(&content);

        Ok(Some(CatalogEntry {
            id: entry_id(path),
            metadata,
            endpoints,
        }))
    }
}

/// Apply the framework's pattern table to `content`.
pub fn extract_endpoints(content: &str, extension: &str, framework: Framework) -> Vec<Endpoint> {
    match_routes(framework.patterns(), content, extension)
        .into_iter()
        .map(route_endpoint)
        .collect()
}

fn route_endpoint(route: RouteMatch<'_>) -> Endpoint {
    let mut endpoint = Endpoint::new(route.method, route.path);
    if route.text.to_lowercase().contains("deprecated") {
        endpoint.status = EndpointStatus::Deprecated;
    }
    endpoint
}
