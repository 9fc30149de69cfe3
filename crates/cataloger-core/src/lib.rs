//! # cataloger-core
//!
//! Shared errors, configuration, and tracing setup for the API cataloger.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{CatalogerConfig, OutputConfig, OutputFormat, ScanConfig};
pub use errors::{ConfigError, ExtractError, OutputError, ScanError};
