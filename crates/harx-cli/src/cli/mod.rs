//! CLI for the HAR extractor.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use harx_core::config;
use harx_core::storage;
use std::path::PathBuf;

use commands::{print_usage, run_extract};

/// Exit status when no input file was given.
pub const EXIT_USAGE: i32 = 2;

/// Top-level CLI for the HAR extractor.
#[derive(Debug, Parser)]
#[command(name = "harx", version)]
#[command(
    about = "HAR Extractor: unpack embedded payloads from an HTTP Archive",
    long_about = None
)]
pub struct Cli {
    /// Path to the HAR file.
    #[arg(value_name = "FILE.har")]
    pub har: Option<PathBuf>,

    /// Directory in which the output folder is created (default: next to the harx executable).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.config/harx/config.toml if it exists).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses arguments, runs the extraction and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<i32> {
        let Some(har) = self.har else {
            tracing::warn!("invoked without an input file");
            print_usage();
            return Ok(EXIT_USAGE);
        };

        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let output_parent = match self.output_dir {
            Some(dir) => dir,
            None => storage::program_dir().context("locate program directory")?,
        };

        run_extract(&har, &output_parent, &cfg)
    }
}
