//! qindex CLI
//!
//! Indexes the header metadata of the `.qmd` documents in a directory.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use qindex_cli::{finish, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for record output.
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.resolve_config()?;
    let mut stdout = std::io::stdout().lock();
    let aggregation = run(&config, &mut stdout, !args.quiet)?;
    finish(&aggregation)?;

    Ok(())
}
