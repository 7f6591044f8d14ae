//! Argument parsing and config layering.
//!
//! Values are resolved as defaults, then the config file (`--config` or
//! `QINDEX_CONFIG`), then explicit flags. With no arguments at all the
//! current directory is indexed into `saida.json`.

use std::path::PathBuf;

use clap::Parser;
use qindex_core::{ErrorPolicy, IndexConfig};

use crate::error::Result;

/// qindex - index the header metadata of a Quarto content tree
#[derive(Parser, Debug)]
#[command(name = "qindex")]
#[command(author, version, about = "Index the header metadata of a Quarto content tree", long_about = None)]
pub struct Args {
    /// Directory whose top-level documents are indexed [default: .]
    pub base_dir: Option<PathBuf>,

    /// Output JSON file [default: saida.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "QINDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Document extension [default: qmd]
    #[arg(long)]
    pub extension: Option<String>,

    /// Prefix that marks a header entry as a child path [default: conteudo/]
    #[arg(long)]
    pub child_prefix: Option<String>,

    /// Skip unreadable documents and report them at the end
    #[arg(long)]
    pub collect_errors: bool,

    /// Process documents in file-name order
    #[arg(long)]
    pub sort: bool,

    /// Do not echo records to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the run configuration from the config file and flags.
    pub fn resolve_config(&self) -> Result<IndexConfig> {
        let mut config = match &self.config {
            Some(path) => IndexConfig::load(path)?,
            None => IndexConfig::default(),
        };

        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(extension) = &self.extension {
            config = config.with_extension(extension);
        }
        if let Some(prefix) = &self.child_prefix {
            config.child_prefix = prefix.clone();
        }
        if self.collect_errors {
            config.error_policy = ErrorPolicy::Collect;
        }
        if self.sort {
            config.sort_entries = true;
        }

        config.validate()?;
        Ok(config)
    }
}
