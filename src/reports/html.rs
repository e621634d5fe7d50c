//! Static HTML dashboard (human-friendly)

use anyhow::Result;

use super::utils::{format_percentage, html_escape};
use super::{ReportFormat, ReportGenerator};
use crate::config::DisplayConfig;
use crate::data::{CoverageMetrics, DashboardSnapshot, LintMetrics};

pub struct HtmlReportGenerator;

impl ReportGenerator for HtmlReportGenerator {
    fn generate(&self, snapshot: &DashboardSnapshot, display: &DisplayConfig) -> Result<String> {
        let title = html_escape(&display.title);
        let coverage_section = coverage_section(&snapshot.coverage);
        let pylint_section = lint_section("Pylint", &snapshot.pylint);
        let flake8_section = lint_section("Flake8", &snapshot.flake8);

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: sans-serif; margin: 20px; background-color: #f4f4f4; color: #333; }}
        .container {{ background-color: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }}
        h1 {{ color: #333; border-bottom: 2px solid #4CAF50; padding-bottom: 10px; }}
        h2 {{ color: #555; margin-top: 30px; }}
        table {{ width: 100%; border-collapse: collapse; margin-top: 10px; }}
        th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
        th {{ background-color: #4CAF50; color: white; }}
        .metric {{ font-size: 1.2em; }}
        .timestamp {{ font-size: 0.9em; color: #777; margin-bottom: 20px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <p class="timestamp">Report generated on: {timestamp}</p>
{coverage_section}{pylint_section}{flake8_section}    </div>
</body>
</html>
"#,
            timestamp = html_escape(&snapshot.generation_timestamp),
        );

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

fn coverage_section(coverage: &CoverageMetrics) -> String {
    let mut rows = vec![
        ("Total Lines", coverage.lines_total.to_string()),
        ("Covered Lines", coverage.lines_covered.to_string()),
    ];
    if let Some(branch_percentage) = coverage.branch_percentage() {
        rows.push(("Total Branches", coverage.branches_total.to_string()));
        rows.push(("Covered Branches", coverage.branches_covered.to_string()));
        rows.push(("Branch Coverage", format_percentage(branch_percentage)));
    }

    format!(
        r#"
        <h2>Test Coverage</h2>
        <p class="metric">Overall Coverage: <strong>{}</strong></p>
{}"#,
        format_percentage(coverage.coverage_percentage),
        table(("Metric", "Value"), &rows)
    )
}

fn lint_section(tool: &str, metrics: &LintMetrics) -> String {
    let mut section = format!(
        r#"
        <h2>Static Analysis - {tool}</h2>
        <p class="metric">Total {tool} Issues: <strong>{}</strong></p>
"#,
        metrics.total_issues
    );

    if let Some(breakdown) = metrics.breakdown {
        let rows = [
            ("Errors", breakdown.errors.to_string()),
            ("Warnings", breakdown.warnings.to_string()),
            ("Refactor", breakdown.refactor.to_string()),
            ("Convention", breakdown.convention.to_string()),
        ];
        section.push_str(&table(("Type", "Count"), &rows));
    }

    section
}

fn table(header: (&str, &str), rows: &[(&str, String)]) -> String {
    let mut html = format!(
        "        <table>\n            <tr><th>{}</th><th>{}</th></tr>\n",
        header.0, header.1
    );
    for (label, value) in rows {
        html.push_str(&format!(
            "            <tr><td>{label}</td><td>{}</td></tr>\n",
            html_escape(value)
        ));
    }
    html.push_str("        </table>\n");
    html
}
