//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cataloger_analysis::extraction::docs::truncate_chars;
use cataloger_analysis::output::{load_catalog, write_catalog};
use cataloger_analysis::Scanner;
use cataloger_core::config::{CatalogerConfig, OutputFormat};
use tracing::info;

/// Characters of summary/description shown per search hit.
const SEARCH_SNIPPET: usize = 80;

pub struct ScanArgs {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub team: Option<String>,
    pub no_recursive: bool,
    pub config: Option<PathBuf>,
}

pub fn scan(args: ScanArgs) -> Result<()> {
    let mut config = CatalogerConfig::load(&args.path, args.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(format) = &args.format {
        config.output.format = Some(format.parse::<OutputFormat>()?);
    }
    if let Some(output) = args.output {
        config.output.path = Some(output);
    }
    if let Some(team) = args.team {
        config.scan.team_owner = Some(team);
    }
    if args.no_recursive {
        config.scan.recursive = Some(false);
    }

    let format = config.output.effective_format();
    let output = config.output.effective_path();

    info!(path = %args.path.display(), "scanning");
    let catalog = Scanner::new(config.scan)
        .scan(&args.path)
        .with_context(|| format!("Failed to scan {}", args.path.display()))?;

    write_catalog(&catalog, &output, format)
        .with_context(|| format!("Failed to write catalog to {}", output.display()))?;

    println!(
        "Cataloged {} endpoints from {} sources -> {}",
        catalog.endpoint_count(),
        catalog.entries.len(),
        output.display()
    );
    Ok(())
}

pub fn search(catalog_path: &Path, query: &str) -> Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    let hits = catalog.search_entries_with_method(query);
    if hits.is_empty() {
        println!("No endpoints match '{query}'");
        return Ok(());
    }

    for (entry, endpoint) in &hits {
        let text = endpoint
            .summary
            .as_deref()
            .or(endpoint.description.as_deref())
            .map(|t| truncate_chars(t, SEARCH_SNIPPET))
            .unwrap_or_default();
        println!(
            "{:<7} {:<40} {:<80} {}",
            endpoint.method,
            endpoint.path,
            text.replace('\n', " "),
            entry.metadata.source_file
        );
    }
    println!("{} matching endpoints", hits.len());
    Ok(())
}

pub fn stats(catalog_path: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;
    let stats = catalog.stats();

    println!("Generated: {}", catalog.generated_at.to_rfc3339());
    println!("Sources:   {}", stats.sources);
    println!("Endpoints: {}", stats.endpoints);
    println!();
    println!("By method:");
    for (method, count) in &stats.by_method {
        println!("  {method:<8} {count}");
    }
    println!("By status:");
    for (status, count) in &stats.by_status {
        println!("  {status:<11} {count}");
    }
    Ok(())
}
