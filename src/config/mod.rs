//! Configuration management for qdash
//!
//! Input/output locations and dashboard settings are resolved once, by
//! [`DashboardConfig::load`], and then passed explicitly to the aggregator.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod core;
mod overrides;

pub use overrides::ConfigOverrides;

/// Main configuration structure for qdash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// Where the tool reports are read from
    pub inputs: InputsConfig,

    /// Where the snapshot and dashboard are written
    pub outputs: OutputsConfig,

    /// Presentation settings
    pub dashboard: DisplayConfig,
}

/// Report input locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputsConfig {
    /// Directory holding the report artifacts
    pub dir: PathBuf,

    /// Coverage XML file name
    pub coverage: String,

    /// Pylint JSON report file name
    pub pylint: String,

    /// Flake8 text report file name
    pub flake8: String,
}

/// Output artifact locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputsConfig {
    /// Directory receiving both artifacts (created on demand)
    pub dir: PathBuf,

    /// Snapshot JSON file name
    pub json: String,

    /// Dashboard HTML file name
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Page title and top heading of the HTML dashboard
    pub title: String,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("reports_input"),
            coverage: "coverage.xml".to_string(),
            pylint: "pylint-report.json".to_string(),
            flake8: "flake8-report.txt".to_string(),
        }
    }
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dashboard_output"),
            json: "dashboard_data.json".to_string(),
            html: "quality_dashboard.html".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Quality Dashboard".to_string(),
        }
    }
}

impl InputsConfig {
    pub fn coverage_path(&self) -> PathBuf {
        self.dir.join(&self.coverage)
    }

    pub fn pylint_path(&self) -> PathBuf {
        self.dir.join(&self.pylint)
    }

    pub fn flake8_path(&self) -> PathBuf {
        self.dir.join(&self.flake8)
    }
}

impl OutputsConfig {
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(&self.json)
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(&self.html)
    }
}

impl DashboardConfig {
    /// Configuration rooted at explicit input and output directories
    pub fn with_dirs(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.inputs.dir = input_dir.into();
        config.outputs.dir = output_dir.into();
        config
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("inputs.coverage", &self.inputs.coverage),
            ("inputs.pylint", &self.inputs.pylint),
            ("inputs.flake8", &self.inputs.flake8),
            ("outputs.json", &self.outputs.json),
            ("outputs.html", &self.outputs.html),
        ] {
            if name.trim().is_empty() {
                anyhow::bail!("{key} cannot be empty");
            }
        }

        if self.outputs.json_path() == self.outputs.html_path() {
            anyhow::bail!(
                "outputs.json and outputs.html both point to {}",
                self.outputs.json_path().display()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
