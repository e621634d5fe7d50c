//! Command-line interface for qdash
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing and dispatches to one module per command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use commands::{config, generate, seed, version};

/// qdash - Aggregate coverage and lint reports into a quality dashboard
#[derive(Parser)]
#[command(
    name = "qdash",
    version = crate::VERSION,
    about = "Aggregate coverage and lint reports into a quality dashboard",
    long_about = "qdash reads a coverage XML report, a pylint JSON report and a flake8 text \
                  report, and writes a JSON snapshot plus a static HTML dashboard. Missing or \
                  broken reports degrade to zero values instead of failing the run."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the input reports and write the dashboard (default)
    Generate(generate::GenerateArgs),
    /// Write placeholder input reports for a demo run
    Seed(seed::SeedArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Change directory if specified
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Generate(args)) => generate::execute(args, config_path, &output),
            Some(Commands::Seed(args)) => seed::execute(args, config_path, &output),
            Some(Commands::Config(args)) => config::execute(args, config_path, &output),
            Some(Commands::Version) => version::execute(&output),
            None => generate::execute(generate::GenerateArgs::default(), config_path, &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
