//! Dashboard generation command

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::aggregator::{Aggregator, InputState, OutputState, RunReport};
use crate::cli::Output;
use crate::config::{ConfigOverrides, DashboardConfig};
use crate::data::LintMetrics;
use crate::reports::utils::format_percentage;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Directory containing the input reports
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory to write the dashboard into
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Dashboard page title
    #[arg(long)]
    pub title: Option<String>,

    /// Exit with an error when any input or output degraded
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: GenerateArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let overrides = ConfigOverrides {
        input_dir: args.input_dir,
        output_dir: args.output_dir,
        title: args.title,
    };
    let config = DashboardConfig::load(config_path, Some(&overrides))?;

    output.header("📊 Generating quality dashboard");
    output.verbose(&format!("Reading reports from {}", config.inputs.dir.display()));

    let report = Aggregator::new(config).run();
    print_report(&report, output);

    if args.strict && report.is_degraded() {
        anyhow::bail!("Dashboard generated from incomplete data (--strict)");
    }
    Ok(())
}

/// Total plus the unclassified share when severities are known
fn lint_summary(metrics: &LintMetrics) -> String {
    let unclassified = metrics.unclassified();
    if metrics.breakdown.is_some() && unclassified > 0 {
        format!("{} ({unclassified} unclassified)", metrics.total_issues)
    } else {
        metrics.total_issues.to_string()
    }
}

fn print_report(report: &RunReport, output: &Output) {
    output.category("Inputs");
    for input in &report.inputs {
        let path = input.path.display().to_string();
        match &input.state {
            InputState::Parsed => output.status_indicator(&input.source.to_string(), &path, true),
            InputState::Missing => output.status_indicator(
                &input.source.to_string(),
                &format!("{path} not found, using zero values"),
                false,
            ),
            InputState::Malformed(reason) => output.status_indicator(
                &input.source.to_string(),
                &format!("{reason}, using zero values"),
                false,
            ),
        }
    }

    let snapshot = &report.snapshot;
    output.category("Metrics");
    output.key_value(
        "Coverage:",
        &format_percentage(snapshot.coverage.coverage_percentage),
        true,
    );
    output.key_value(
        "Lines covered:",
        &format!("{}/{}", snapshot.coverage.lines_covered, snapshot.coverage.lines_total),
        false,
    );
    output.key_value("Lines missed:", &snapshot.coverage.lines_missed().to_string(), false);
    output.key_value("Pylint issues:", &lint_summary(&snapshot.pylint), false);
    output.key_value("Flake8 issues:", &lint_summary(&snapshot.flake8), false);
    output.key_value("Lint total:", &snapshot.total_lint_issues().to_string(), false);

    output.category("Outputs");
    for artifact in &report.outputs {
        match &artifact.state {
            OutputState::Written => output.success(&format!(
                "{} generated: {}",
                artifact.format.label(),
                artifact.path.display()
            )),
            OutputState::Failed(reason) => {
                output.error(&format!("{} not written: {reason}", artifact.format.label()))
            }
        }
    }
    output.blank_line();
}
