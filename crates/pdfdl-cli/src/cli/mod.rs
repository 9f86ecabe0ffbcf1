//! CLI for pdfdl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pdfdl_core::config;
use std::path::PathBuf;

use commands::{run_fetch, show_config};

/// Top-level CLI: download PDFs, naming each file after its final (redirected) URL.
#[derive(Debug, Parser)]
#[command(name = "pdfdl")]
#[command(about = "pdfdl: download PDFs into a directory, following redirects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the given URLs (or the configured list) one after another. This is the default.
    Fetch {
        /// URLs to download; replaces the configured list when given.
        urls: Vec<String>,

        /// Directory to write into (created if missing); overrides the config file.
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print the config file location and the effective settings.
    Config,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default();
        tracing::debug!("effective config: {:?}", cfg);

        match cli.command.unwrap_or(CliCommand::Fetch {
            urls: Vec::new(),
            output_dir: None,
        }) {
            CliCommand::Fetch { urls, output_dir } => run_fetch(&cfg, urls, output_dir),
            CliCommand::Config => show_config(&cfg)?,
        }

        Ok(())
    }
}
