//! Quiz Catalog Sync CLI
//!
//! Reconciles `config.json` with the quiz folders below a catalog root.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = dunce::canonicalize(&cli.root).map_err(|e| {
        CliError::user(format!(
            "Catalog root {} is not accessible: {}",
            cli.root.display(),
            e
        ))
    })?;
    tracing::debug!("Catalog root: {}", root.display());

    commands::run_sync(&root)
}
