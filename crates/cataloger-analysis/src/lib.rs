//! # cataloger-analysis
//!
//! Extraction engine for the API cataloger: the catalog model, the three
//! extractors and their dispatcher, the directory scanner, and the JSON/HTML
//! renderers.

pub mod catalog;
pub mod extraction;
pub mod output;
pub mod scanner;

pub use catalog::{Catalog, CatalogEntry, CatalogStats, Endpoint, EndpointStatus, SourceMetadata};
pub use extraction::{Extractor, ExtractorRegistry};
pub use output::{load_catalog, write_catalog};
pub use scanner::Scanner;
