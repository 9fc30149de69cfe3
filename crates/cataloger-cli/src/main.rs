//! api-cataloger: build a unified endpoint catalog from OpenAPI documents,
//! routing files, and annotated sources.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "api-cataloger")]
#[command(about = "Catalog HTTP endpoints from specs and source code")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory (or a single file) and write a catalog
    Scan {
        /// Directory or file to scan
        path: PathBuf,

        /// Output file [default: catalog.<format>]
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: json or html
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Team that owns the scanned APIs
        #[arg(short, long, value_name = "TEAM")]
        team: Option<String>,

        /// Only scan the top level of the directory
        #[arg(long)]
        no_recursive: bool,

        /// Configuration file [default: <path>/.api-cataloger.toml]
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Search a JSON catalog by path, method, summary, description, or tag
    Search {
        /// Catalog written by `scan`
        catalog: PathBuf,
        query: String,
    },
    /// Show endpoint counts of a JSON catalog
    Stats {
        /// Catalog written by `scan`
        catalog: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cataloger_core::logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Scan {
            path,
            output,
            format,
            team,
            no_recursive,
            config,
        } => commands::scan(commands::ScanArgs {
            path,
            output,
            format,
            team,
            no_recursive,
            config,
        }),
        Commands::Search { catalog, query } => commands::search(&catalog, &query),
        Commands::Stats { catalog } => commands::stats(&catalog),
    }
}
