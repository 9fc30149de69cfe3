//! Aggregate counts over a catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Catalog;

/// Endpoint counts by method and by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub sources: usize,
    pub endpoints: usize,
    pub by_method: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut stats = Self {
            sources: catalog.entries.len(),
            ..Self::default()
        };

        for endpoint in catalog.endpoints() {
            stats.endpoints += 1;
            *stats.by_method.entry(endpoint.method.clone()).or_insert(0) += 1;
            *stats
                .by_status
                .entry(endpoint.status.as_str().to_string())
                .or_insert(0) += 1;
        }
        stats
    }

    pub fn active(&self) -> usize {
        self.by_status.get("active").copied().unwrap_or(0)
    }
}
