//! Report aggregation pipeline
//!
//! Parses the three input reports, merges them into a [`DashboardSnapshot`]
//! and writes the JSON and HTML outputs. Every stage is best-effort: a bad
//! input degrades to its default record and a failed output is skipped, so a
//! run always completes and reports what degraded in its [`RunReport`].

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::config::DashboardConfig;
use crate::data::{CoverageMetrics, DashboardSnapshot, LintMetrics};
use crate::parsers::{self, ParseError};
use crate::reports::{self, HtmlReportGenerator, JsonReportGenerator, ReportGenerator};

mod status;

pub use status::{InputState, InputStatus, OutputState, OutputStatus, ReportSource, RunReport};

pub struct Aggregator {
    config: DashboardConfig,
}

impl Aggregator {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline stamped with the current time
    pub fn run(&self) -> RunReport {
        self.run_at(Utc::now())
    }

    /// Run the pipeline with an explicit generation instant
    pub fn run_at(&self, generated_at: DateTime<Utc>) -> RunReport {
        let inputs_config = &self.config.inputs;
        let mut inputs = Vec::with_capacity(3);

        let coverage = collect(
            ReportSource::Coverage,
            &inputs_config.coverage_path(),
            parsers::parse_coverage_xml,
            CoverageMetrics::default,
            &mut inputs,
        );
        let pylint = collect(
            ReportSource::Pylint,
            &inputs_config.pylint_path(),
            parsers::parse_lint_json,
            LintMetrics::empty_breakdown,
            &mut inputs,
        );
        let flake8 = collect(
            ReportSource::Flake8,
            &inputs_config.flake8_path(),
            parsers::parse_lint_text,
            || LintMetrics::total_only(0),
            &mut inputs,
        );

        let snapshot = DashboardSnapshot::new(coverage, pylint, flake8, generated_at);

        // Independent outputs: a failed JSON write must not block the HTML
        let outputs = vec![
            self.emit(&JsonReportGenerator, &snapshot, self.config.outputs.json_path()),
            self.emit(&HtmlReportGenerator, &snapshot, self.config.outputs.html_path()),
        ];

        RunReport {
            snapshot,
            inputs,
            outputs,
        }
    }

    fn emit(
        &self,
        generator: &dyn ReportGenerator,
        snapshot: &DashboardSnapshot,
        path: PathBuf,
    ) -> OutputStatus {
        let state =
            match reports::write_report(generator, snapshot, &self.config.dashboard, &path) {
                Ok(()) => OutputState::Written,
                Err(e) => {
                    tracing::error!("Error generating {}: {e:#}", generator.format().label());
                    OutputState::Failed(format!("{e:#}"))
                }
            };

        OutputStatus {
            format: generator.format(),
            path,
            state,
        }
    }
}

/// Parse one input, substituting `fallback` and recording why when it fails
fn collect<T>(
    source: ReportSource,
    path: &Path,
    parse: impl FnOnce(&Path) -> Result<T, ParseError>,
    fallback: impl FnOnce() -> T,
    statuses: &mut Vec<InputStatus>,
) -> T {
    match parse(path) {
        Ok(metrics) => {
            tracing::debug!("Parsed {source} report: {}", path.display());
            statuses.push(InputStatus {
                source,
                path: path.to_path_buf(),
                state: InputState::Parsed,
            });
            metrics
        }
        Err(e) => {
            if e.is_missing() {
                tracing::warn!("{source} report not found: {}", path.display());
            } else {
                tracing::warn!("Error parsing {source} report: {e}");
            }
            statuses.push(InputStatus::from_error(source, &e));
            fallback()
        }
    }
}

#[cfg(test)]
mod tests;
