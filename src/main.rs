//! apidoc — regenerate the API documentation JSON.
//!
//! Run with no arguments from the project root as a build step:
//! `apidoc` scans `src/api` and overwrites `src/data/api-docs.json`.

use anyhow::{Context, Result};
use apidoc::{ScanOptions, WalkOrder};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apidoc",
    about = "Generate API documentation JSON from TypeScript request modules"
)]
struct Cli {
    /// API source directory to scan
    #[arg(short = 'r', long, default_value = "src/api")]
    root: PathBuf,

    /// JSON artifact to overwrite
    #[arg(short = 'o', long, default_value = "src/data/api-docs.json")]
    output: PathBuf,

    /// Source file extension (declaration files `.d.<ext>` are skipped)
    #[arg(long, default_value = apidoc::options::DEFAULT_EXTENSION)]
    ext: String,

    /// Visit directory entries sorted by name instead of listing order
    #[arg(long)]
    sorted: bool,

    /// Skip files matching this glob (relative to the root). Repeatable.
    #[arg(long)]
    exclude: Vec<String>,

    /// Print the JSON to stdout instead of writing the artifact
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ScanOptions {
        extension: cli.ext.trim_start_matches('.').to_string(),
        order: if cli.sorted {
            WalkOrder::Sorted
        } else {
            WalkOrder::Listing
        },
        ..ScanOptions::default()
    }
    .with_excludes(&cli.exclude)?;

    let tree = apidoc::scan(&cli.root, &options)
        .with_context(|| format!("failed to scan {}", cli.root.display()))?;

    if cli.stdout {
        let json = apidoc::to_json(&tree)?;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", json).context("failed to write stdout")?;
        return Ok(());
    }

    apidoc::write_artifact(&tree, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
