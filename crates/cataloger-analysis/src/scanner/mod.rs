//! Scanner: walk a tree and feed every file to the extractor registry.

pub mod walker;

use std::path::Path;
use std::time::Instant;

use cataloger_core::config::ScanConfig;
use cataloger_core::errors::ScanError;

pub use walker::{walk_directory, DEFAULT_IGNORES, IGNORE_FILE_NAME};

use crate::catalog::Catalog;
use crate::extraction::ExtractorRegistry;

pub struct Scanner {
    config: ScanConfig,
    registry: ExtractorRegistry,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_registry(config, ExtractorRegistry::new())
    }

    pub fn with_registry(config: ScanConfig, registry: ExtractorRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Build a catalog from `root`, a directory or a single file.
    ///
    /// Files are visited in sorted path order. Per-file failures are logged
    /// and skipped; only a missing or unwalkable root fails the scan.
    pub fn scan(&self, root: &Path) -> Result<Catalog, ScanError> {
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }

        let start = Instant::now();
        let files = if root.is_file() {
            vec![root.to_path_buf()]
        } else {
            walk_directory(root, &self.config)?
        };

        let team_owner = self.config.team_owner.as_deref();
        let mut catalog = Catalog::new();
        for file in &files {
            if let Some(entry) = self.registry.dispatch(file, team_owner) {
                catalog.add(entry);
            }
        }

        tracing::info!(
            root = %root.display(),
            files = files.len(),
            sources = catalog.entries.len(),
            endpoints = catalog.endpoint_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_root() {
        let scanner = Scanner::new(ScanConfig::default());
        let err = scanner.scan(Path::new("/no/such/root")).unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound(_)));
    }

    #[test]
    fn test_single_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_controller.js");
        fs::write(&path, "router.get('/users', list);\n").unwrap();

        let catalog = Scanner::new(ScanConfig::default()).scan(&path).unwrap();
        assert_eq!(catalog.entries.len(), 1);
        assert_eq!(catalog.endpoint_count(), 1);
    }

    #[test]
    fn test_team_owner_stamped_and_order_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_routes.js"), "router.get('/b', h);\n").unwrap();
        fs::write(dir.path().join("a_routes.js"), "router.get('/a', h);\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "router.get('/c', h);\n").unwrap();

        let config = ScanConfig {
            team_owner: Some("Platform".to_string()),
            ..ScanConfig::default()
        };
        let catalog = Scanner::new(config).scan(dir.path()).unwrap();
        let paths: Vec<_> = catalog.endpoints().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/a", "/b"]);
        assert!(catalog
            .entries
            .iter()
            .all(|e| e.metadata.team_owner.as_deref() == Some("Platform")));
    }
}
