//! OpenAPI 3.x / Swagger 2.0 document extractor.

use std::path::Path;

use cataloger_core::errors::ExtractError;
use serde_json::{Map, Value};

use super::source::{base_metadata, entry_id, extension, read_source};
use super::Extractor;
use crate::catalog::{CatalogEntry, Endpoint, EndpointStatus};

/// HTTP methods recognised as operation keys under a path item.
const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Extensions of declarative documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Top-level keys that mark a document as an API specification.
const SPEC_MARKERS: &[&str] = &["openapi", "swagger"];

/// Extracts endpoints from OpenAPI/Swagger documents.
pub struct OpenApiExtractor;

impl Extractor for OpenApiExtractor {
    fn name(&self) -> &str {
        "openapi"
    }

    fn recognizes(&self, path: &Path) -> bool {
        if !DOCUMENT_EXTENSIONS.contains(&extension(path).as_str()) {
            return false;
        }
        match load_document(path) {
            Ok(doc) => is_spec_document(&doc),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "not a readable document");
                false
            }
        }
    }

    fn extract(
        &self,
        path: &Path,
        team_owner: Option<&str>,
    ) -> Result<Option<CatalogEntry>, ExtractError> {
        let doc = load_document(path)?;
        let root = doc
            .as_object()
            .ok_or_else(|| ExtractError::malformed(path, "document root must be a mapping"))?;

        let endpoints = parse_endpoints(root);
        if endpoints.is_empty() {
            return Ok(None);
        }

        let info = root.get("info").and_then(Value::as_object);
        let info_text = |key: &str| info.and_then(|i| i.get(key)).and_then(scalar_text);

        let mut metadata = base_metadata(path, team_owner);
        metadata.title = info_text("title");
        metadata.version = info_text("version");
        metadata.description = info_text("description");
        metadata.base_url = base_url(root);

        Ok(Some(CatalogEntry {
            id: entry_id(path),
            metadata,
            endpoints,
        }))
    }
}

/// Parse a `.json` file with serde_json, anything else as YAML.
fn load_document(path: &Path) -> Result<Value, ExtractError> {
    let content = read_source(path)?;
    parse_document(&content, &extension(path)).map_err(|message| ExtractError::malformed(path, message))
}

fn parse_document(content: &str, extension: &str) -> Result<Value, String> {
    if extension == "json" {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<serde_yaml::Value>(content)
            .map(yaml_to_json)
            .map_err(|e| e.to_string())
    }
}

/// YAML allows non-string keys (`200:` under `responses`); they become text.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .filter_map(|(key, value)| yaml_key(key).map(|k| (k, yaml_to_json(value))))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_spec_document(doc: &Value) -> bool {
    doc.as_object()
        .is_some_and(|root| SPEC_MARKERS.iter().any(|marker| root.contains_key(*marker)))
}

/// First `servers[].url`, else `scheme://host basePath` for Swagger 2.0.
fn base_url(root: &Map<String, Value>) -> Option<String> {
    if let Some(first) = root
        .get("servers")
        .and_then(Value::as_array)
        .and_then(|servers| servers.first())
    {
        return first.get("url").and_then(Value::as_str).map(str::to_string);
    }

    let host = root.get("host").and_then(scalar_text)?;
    let scheme = root
        .get("schemes")
        .and_then(Value::as_array)
        .and_then(|schemes| schemes.first())
        .and_then(Value::as_str)
        .unwrap_or("https");
    let base_path = root.get("basePath").and_then(Value::as_str).unwrap_or("");
    Some(format!("{scheme}://{host}{base_path}"))
}

fn parse_endpoints(root: &Map<String, Value>) -> Vec<Endpoint> {
    let Some(paths) = root.get("paths").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut endpoints = Vec::new();
    for (path, item) in paths {
        let Some(item) = item.as_object() else { continue };
        for (key, operation) in item {
            let method = key.to_ascii_uppercase();
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            let Some(operation) = operation.as_object() else { continue };
            endpoints.push(operation_endpoint(path, method, operation));
        }
    }
    endpoints
}

fn operation_endpoint(path: &str, method: String, operation: &Map<String, Value>) -> Endpoint {
    let tags: Vec<String> = operation
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| tags.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();
    let deprecated = operation
        .get("deprecated")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Endpoint {
        path: path.to_string(),
        method,
        description: operation.get("description").and_then(Value::as_str).map(str::to_string),
        summary: operation.get("summary").and_then(Value::as_str).map(str::to_string),
        parameters: operation
            .get("parameters")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        responses: operation
            .get("responses")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        status: operation_status(deprecated, &tags),
        tags,
    }
}

/// `deprecated` beats `beta` beats `internal`; anything else is active.
fn operation_status(deprecated: bool, tags: &[String]) -> EndpointStatus {
    let has_tag = |wanted: &str| tags.iter().any(|t| t == wanted);
    if deprecated {
        EndpointStatus::Deprecated
    } else if has_tag("beta") {
        EndpointStatus::Beta
    } else if has_tag("internal") {
        EndpointStatus::Internal
    } else {
        EndpointStatus::Active
    }
}

/// Strings as-is, numbers and booleans rendered, everything else ignored.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_status_precedence() {
        let tags = |t: &[&str]| t.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(operation_status(true, &tags(&["beta", "internal"])), EndpointStatus::Deprecated);
        assert_eq!(operation_status(false, &tags(&["internal", "beta"])), EndpointStatus::Beta);
        assert_eq!(operation_status(false, &tags(&["internal"])), EndpointStatus::Internal);
        assert_eq!(operation_status(false, &tags(&["Beta"])), EndpointStatus::Active);
        assert_eq!(operation_status(false, &[]), EndpointStatus::Active);
    }

    #[test]
    fn test_base_url_from_servers() {
        let doc = root(json!({
            "servers": [{"url": "https://api.example.com/v1"}, {"url": "https://staging"}],
            "host": "ignored.example.com"
        }));
        assert_eq!(base_url(&doc).as_deref(), Some("https://api.example.com/v1"));
    }

    #[test]
    fn test_base_url_from_swagger_fields() {
        let doc = root(json!({"host": "petstore.io", "schemes": ["http"], "basePath": "/v2"}));
        assert_eq!(base_url(&doc).as_deref(), Some("http://petstore.io/v2"));

        let doc = root(json!({"host": "petstore.io", "schemes": []}));
        assert_eq!(base_url(&doc).as_deref(), Some("https://petstore.io"));

        let doc = root(json!({"host": "petstore.io"}));
        assert_eq!(base_url(&doc).as_deref(), Some("https://petstore.io"));
    }

    #[test]
    fn test_base_url_absent() {
        assert!(base_url(&root(json!({"servers": []}))).is_none());
        assert!(base_url(&root(json!({}))).is_none());
    }

    #[test]
    fn test_unknown_keys_and_non_objects_are_skipped() {
        let doc = root(json!({
            "paths": {
                "/a": {
                    "parameters": [{"name": "id"}],
                    "get": {"summary": "A"},
                    "trace": {"summary": "T"},
                    "x-internal": {"summary": "X"},
                    "post": "not an operation"
                },
                "/b": "not a path item",
                "/c": {"DELETE": {}}
            }
        }));
        let endpoints = parse_endpoints(&doc);
        let pairs: Vec<_> = endpoints.iter().map(|e| (e.method.as_str(), e.path.as_str())).collect();
        assert_eq!(pairs, vec![("GET", "/a"), ("DELETE", "/c")]);
    }

    #[test]
    fn test_opaque_fields_copied() {
        let doc = root(json!({
            "paths": {
                "/pets/{id}": {
                    "get": {
                        "parameters": [{"name": "id", "in": "path"}],
                        "responses": {"200": {"description": "OK"}, "404": {"description": "Missing"}},
                        "tags": ["pets", 7]
                    }
                }
            }
        }));
        let endpoint = &parse_endpoints(&doc)[0];
        assert_eq!(endpoint.parameters, vec![json!({"name": "id", "in": "path"})]);
        assert_eq!(endpoint.responses.keys().collect::<Vec<_>>(), vec!["200", "404"]);
        assert_eq!(endpoint.tags, vec!["pets"]);
    }

    #[test]
    fn test_marker_detection() {
        assert!(is_spec_document(&json!({"openapi": "3.0.0"})));
        assert!(is_spec_document(&json!({"swagger": "2.0"})));
        assert!(!is_spec_document(&json!({"just": "yaml"})));
        assert!(!is_spec_document(&json!(["openapi"])));
    }

    #[test]
    fn test_numeric_yaml_keys_become_text() {
        let doc = parse_document("paths:\n  /a:\n    get:\n      responses:\n        200:\n          description: OK\n", "yml").unwrap();
        let endpoint = &parse_endpoints(doc.as_object().unwrap())[0];
        assert_eq!(endpoint.responses["200"]["description"], "OK");
    }

    #[test]
    fn test_numeric_version_rendered() {
        let doc = parse_document("openapi: 3.0.0\ninfo:\n  version: 1.5\n", "yaml").unwrap();
        let version = doc["info"]["version"].clone();
        assert_eq!(scalar_text(&version).as_deref(), Some("1.5"));
    }
}
