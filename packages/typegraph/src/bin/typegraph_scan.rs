//! Typegraph scan CLI
//!
//! Scans a directory of declaration files and prints the type model as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Scan with defaults (ES2019, *.d.ts)
//! cargo run --bin typegraph-scan -- node_modules/@types/node
//!
//! # Only one type, pretty printed, failing on syntax errors
//! cargo run --bin typegraph-scan -- types --type Request --pretty --strict
//!
//! # Verbose logging
//! RUST_LOG=typegraph=debug cargo run --bin typegraph-scan -- types
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use typegraph::{scan_for_types, BatchReport, LanguageVersion, ScanConfig, ScanOptions};

#[derive(Parser)]
#[command(name = "typegraph-scan")]
#[command(about = "Build the type model of a declaration-file tree", long_about = None)]
struct Cli {
    /// Directory to scan
    dir: PathBuf,

    /// Language version (es3, es5, es2015..es2022, esnext, latest)
    #[arg(short = 'l', long)]
    language_version: Option<LanguageVersion>,

    /// YAML scan configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail on syntax errors
    #[arg(long)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Only report declarations with this name
    #[arg(short = 't', long = "type")]
    type_name: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ScanConfig::from_yaml_file(path)?,
        None => ScanConfig::default(),
    };
    if let Some(version) = cli.language_version {
        config = config.language_version(version);
    }
    if cli.strict {
        config = config.strict_syntax(true);
    }

    let batch = scan_for_types(&cli.dir, &ScanOptions::new(config))?;
    let report = BatchReport::from_batch(&batch, cli.type_name.as_deref());
    println!("{}", report.to_json(cli.pretty)?);

    Ok(())
}
