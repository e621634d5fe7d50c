//! Configuration command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::path::Path;

use crate::cli::Output;
use crate::config::DashboardConfig;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the fully resolved configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
    /// Check that the configuration loads and is consistent
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

pub fn execute(args: ConfigArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = DashboardConfig::load(config_path, None)?;

    match args.command {
        ConfigCommand::Show { format } => {
            output.plain(render(&config, format)?.trim_end());
        }
        ConfigCommand::Validate => {
            output.success("Configuration is valid");
            output.key_value("Coverage:", &config.inputs.coverage_path().display().to_string(), false);
            output.key_value("Pylint:", &config.inputs.pylint_path().display().to_string(), false);
            output.key_value("Flake8:", &config.inputs.flake8_path().display().to_string(), false);
            output.key_value("JSON output:", &config.outputs.json_path().display().to_string(), false);
            output.key_value("HTML output:", &config.outputs.html_path().display().to_string(), false);
        }
    }
    Ok(())
}

fn render(config: &DashboardConfig, format: ConfigFormat) -> Result<String> {
    let rendered = match format {
        ConfigFormat::Toml => toml::to_string_pretty(config).context("Failed to render TOML")?,
        ConfigFormat::Json => serde_json::to_string_pretty(config).context("Failed to render JSON")?,
        ConfigFormat::Yaml => serde_yml::to_string(config).context("Failed to render YAML")?,
    };
    Ok(rendered)
}
