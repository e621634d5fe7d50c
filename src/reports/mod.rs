//! Dashboard output generation
//!
//! Renders a [`DashboardSnapshot`] into its output formats through a common
//! generator trait and writes the result to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::DisplayConfig;
use crate::data::DashboardSnapshot;

mod html;
mod json;
pub mod utils;

pub use html::HtmlReportGenerator;
pub use json::JsonReportGenerator;

/// Core reporting trait - one implementation per output format
pub trait ReportGenerator {
    /// Render the snapshot as a string
    fn generate(&self, snapshot: &DashboardSnapshot, display: &DisplayConfig) -> Result<String>;

    /// Which format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Report format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Html,
}

impl ReportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Json => "Dashboard data JSON",
            ReportFormat::Html => "HTML dashboard",
        }
    }
}

/// Render with `generator` and write the result to `path`, creating parent directories
pub fn write_report(
    generator: &dyn ReportGenerator,
    snapshot: &DashboardSnapshot,
    display: &DisplayConfig,
    path: &Path,
) -> Result<()> {
    let content = generator.generate(snapshot, display)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    tracing::info!("{} generated: {}", generator.format().label(), path.display());
    Ok(())
}
