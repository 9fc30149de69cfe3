//! In-memory catalog: append-only entries plus search and statistics.

pub mod stats;
pub mod types;

pub use stats::CatalogStats;
pub use types::{CatalogEntry, Endpoint, EndpointStatus, SourceMetadata};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The unified catalog produced by one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// An empty catalog stamped with the current time.
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Append an entry. Callers never pass entries without endpoints.
    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// Endpoints whose path, description, summary, or any tag contains
    /// `query`, ignoring case. Entry-then-endpoint order, each at most once.
    pub fn search(&self, query: &str) -> Vec<&Endpoint> {
        self.search_entries(query)
            .into_iter()
            .map(|(_, endpoint)| endpoint)
            .collect()
    }

    /// Like [`Catalog::search`], paired with the entry each hit came from.
    pub fn search_entries(&self, query: &str) -> Vec<(&CatalogEntry, &Endpoint)> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .flat_map(|entry| entry.endpoints.iter().map(move |endpoint| (entry, endpoint)))
            .filter(|(_, endpoint)| endpoint.matches_lowercase(&needle))
            .collect()
    }

    /// Like [`Catalog::search_entries`], also matching the HTTP method, so
    /// `"post"` finds every POST endpoint.
    pub fn search_entries_with_method(&self, query: &str) -> Vec<(&CatalogEntry, &Endpoint)> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .flat_map(|entry| entry.endpoints.iter().map(move |endpoint| (entry, endpoint)))
            .filter(|(_, endpoint)| {
                endpoint.method.to_lowercase().contains(&needle) || endpoint.matches_lowercase(&needle)
            })
            .collect()
    }

    /// All endpoints in insertion order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.entries.iter().flat_map(|entry| entry.endpoints.iter())
    }

    pub fn endpoint_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.endpoints.len()).sum()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_catalog(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, endpoints: Vec<Endpoint>) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            metadata: SourceMetadata {
                source_file: format!("{id}.yaml"),
                ..SourceMetadata::default()
            },
            endpoints,
        }
    }

    fn documented(method: &str, path: &str, summary: &str, tags: &[&str]) -> Endpoint {
        let mut ep = Endpoint::new(method, path);
        ep.summary = Some(summary.to_string());
        ep.tags = tags.iter().map(|t| t.to_string()).collect();
        ep
    }

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(entry(
            "users",
            vec![
                documented("GET", "/api/users", "List users", &["accounts"]),
                documented("POST", "/api/users", "Create a user", &[]),
            ],
        ));
        catalog.add(entry(
            "orders",
            vec![documented("GET", "/api/orders/{id}", "Fetch an order", &["Billing"])],
        ));
        catalog
    }

    #[test]
    fn test_search_matches_path_case_insensitive() {
        let catalog = sample();
        let hits = catalog.search("USERS");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].method, "GET");
        assert_eq!(hits[1].method, "POST");
    }

    #[test]
    fn test_search_matches_summary_and_tags() {
        let catalog = sample();
        assert_eq!(catalog.search("create").len(), 1);
        assert_eq!(catalog.search("billing")[0].path, "/api/orders/{id}");
    }

    #[test]
    fn test_search_returns_endpoint_once_when_many_fields_match() {
        let mut catalog = Catalog::new();
        let mut ep = documented("GET", "/pets", "pets", &["pets"]);
        ep.description = Some("All pets".to_string());
        catalog.add(entry("pets", vec![ep]));
        assert_eq!(catalog.search("pets").len(), 1);
    }

    #[test]
    fn test_search_does_not_match_method() {
        let catalog = sample();
        assert!(catalog.search("post").is_empty());
    }

    #[test]
    fn test_search_entries_pairs_source() {
        let catalog = sample();
        let hits = catalog.search_entries("order");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.metadata.source_file, "orders.yaml");
    }

    #[test]
    fn test_search_entries_with_method_matches_verb() {
        let catalog = sample();
        let hits = catalog.search_entries_with_method("post");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.path, "/api/users");
        assert_eq!(hits[0].0.metadata.source_file, "users.yaml");
        assert_eq!(catalog.search_entries_with_method("billing").len(), 1);
        assert!(catalog.search("post").is_empty());
    }

    #[test]
    fn test_search_no_match_is_empty() {
        assert!(sample().search("nonexistent").is_empty());
    }

    #[test]
    fn test_endpoint_count() {
        assert_eq!(sample().endpoint_count(), 3);
        assert_eq!(Catalog::new().endpoint_count(), 0);
    }
}
