//! Catalog data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of an endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointStatus {
    #[default]
    Active,
    Deprecated,
    Beta,
    Internal,
}

impl EndpointStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointStatus::Active => "active",
            EndpointStatus::Deprecated => "deprecated",
            EndpointStatus::Beta => "beta",
            EndpointStatus::Internal => "internal",
        }
    }
}

impl fmt::Display for EndpointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HTTP route with its documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Path as written in the source, placeholders untouched.
    pub path: String,
    /// Uppercase HTTP verb.
    pub method: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Opaque parameter objects, only filled from specification documents.
    #[serde(default)]
    pub parameters: Vec<Value>,
    /// Response code to opaque response object.
    #[serde(default)]
    pub responses: Map<String, Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: EndpointStatus,
}

impl Endpoint {
    /// A bare endpoint with no documentation and `active` status.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            description: None,
            summary: None,
            parameters: Vec::new(),
            responses: Map::new(),
            tags: Vec::new(),
            status: EndpointStatus::Active,
        }
    }

    /// Case-insensitive substring match over path, description, summary, and tags.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(needle);

        contains(self.path.as_str())
            || self.description.as_deref().is_some_and(contains)
            || self.summary.as_deref().is_some_and(contains)
            || self.tags.iter().any(|t| contains(t.as_str()))
    }
}

/// Metadata describing where an entry came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceMetadata {
    pub team_owner: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub version: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub source_file: String,
    pub base_url: Option<String>,
}

/// One source file's extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub metadata: SourceMetadata,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}
