//! JSON catalog documents.

use cataloger_core::errors::OutputError;

use crate::catalog::Catalog;

/// Pretty-printed `{ "generated_at": ..., "entries": [...] }`.
pub fn to_json(catalog: &Catalog) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

pub fn from_json(content: &str) -> Result<Catalog, OutputError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, Endpoint, EndpointStatus, SourceMetadata};
    use serde_json::{json, Value};

    #[test]
    fn test_document_shape() {
        let mut endpoint = Endpoint::new("POST", "/orders");
        endpoint.status = EndpointStatus::Beta;
        endpoint.responses.insert("201".to_string(), json!({"description": "Created"}));

        let mut catalog = Catalog::new();
        catalog.add(CatalogEntry {
            id: "0123456789ab".to_string(),
            metadata: SourceMetadata {
                team_owner: Some("Commerce".to_string()),
                source_file: "orders.yaml".to_string(),
                ..SourceMetadata::default()
            },
            endpoints: vec![endpoint],
        });

        let doc: Value = serde_json::from_str(&to_json(&catalog).unwrap()).unwrap();
        assert!(doc["generated_at"].is_string());
        let entry = &doc["entries"][0];
        assert_eq!(entry["id"], "0123456789ab");
        assert_eq!(entry["metadata"]["team_owner"], "Commerce");
        assert_eq!(entry["endpoints"][0]["method"], "POST");
        assert_eq!(entry["endpoints"][0]["status"], "beta");
        assert_eq!(entry["endpoints"][0]["responses"]["201"]["description"], "Created");
    }

    #[test]
    fn test_minimal_document_fills_defaults() {
        let catalog = from_json(
            r#"{"generated_at": "2024-01-01T00:00:00Z",
                "entries": [{"id": "x", "metadata": {"source_file": "a.py"},
                             "endpoints": [{"path": "/a", "method": "GET"}]}]}"#,
        )
        .unwrap();
        let endpoint = &catalog.entries[0].endpoints[0];
        assert_eq!(endpoint.status, EndpointStatus::Active);
        assert!(endpoint.tags.is_empty());
        assert!(endpoint.parameters.is_empty());
    }
}
