//! Aggregation pipeline tests

use super::*;
use crate::data::SeverityBreakdown;
use crate::reports::ReportFormat;
use crate::seed;
use std::fs;
use tempfile::TempDir;

struct Workspace {
    _temp_dir: TempDir,
    config: DashboardConfig,
}

impl Workspace {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig::with_dirs(
            temp_dir.path().join("reports_input"),
            temp_dir.path().join("dashboard_output"),
        );
        fs::create_dir_all(&config.inputs.dir).unwrap();
        Self {
            _temp_dir: temp_dir,
            config,
        }
    }

    fn write_input(&self, name: &str, content: &str) {
        fs::write(self.config.inputs.dir.join(name), content).unwrap();
    }

    fn run(&self) -> RunReport {
        Aggregator::new(self.config.clone()).run()
    }
}

#[test]
fn test_placeholder_inputs_end_to_end() {
    let ws = Workspace::new();
    seed::write_placeholder_inputs(&ws.config, false).unwrap();

    let report = ws.run();

    assert!(!report.is_degraded());
    let snapshot = &report.snapshot;
    assert_eq!(
        snapshot.coverage,
        CoverageMetrics {
            coverage_percentage: 85.0,
            lines_total: 2,
            lines_covered: 1,
            branches_total: 0,
            branches_covered: 0,
        }
    );
    assert_eq!(
        snapshot.pylint,
        LintMetrics {
            total_issues: 1,
            breakdown: Some(SeverityBreakdown {
                errors: 1,
                warnings: 0,
                refactor: 0,
                convention: 0,
            }),
        }
    );
    assert_eq!(snapshot.flake8, LintMetrics::total_only(1));
}

#[test]
fn test_missing_inputs_still_produce_both_outputs() {
    let ws = Workspace::new();

    let report = ws.run();

    assert_eq!(report.inputs.len(), 3);
    for input in &report.inputs {
        assert_eq!(input.state, InputState::Missing, "{}", input.source);
    }
    assert_eq!(report.snapshot.coverage, CoverageMetrics::default());
    assert_eq!(report.snapshot.pylint, LintMetrics::empty_breakdown());
    assert_eq!(report.snapshot.flake8, LintMetrics::total_only(0));

    assert!(report.outputs.iter().all(OutputStatus::is_written));
    assert!(ws.config.outputs.json_path().exists());
    assert!(ws.config.outputs.html_path().exists());
    assert!(report.is_degraded());
}

#[test]
fn test_malformed_input_is_isolated() {
    let ws = Workspace::new();
    ws.write_input("coverage.xml", "<coverage line-rate=\"0.5\"><packages>");
    ws.write_input("pylint-report.json", r#"[{"type": "warning"}, {"type": "convention"}]"#);
    ws.write_input("flake8-report.txt", "a.py:1:1: E1\n\nb.py:2:2: W2\n");

    let report = ws.run();

    let coverage = report.input(ReportSource::Coverage).unwrap();
    assert!(matches!(coverage.state, InputState::Malformed(ref reason) if reason.contains("XML")));
    assert_eq!(report.snapshot.coverage, CoverageMetrics::default());

    assert_eq!(report.input(ReportSource::Pylint).unwrap().state, InputState::Parsed);
    assert_eq!(report.snapshot.pylint.total_issues, 2);
    assert_eq!(report.input(ReportSource::Flake8).unwrap().state, InputState::Parsed);
    assert_eq!(report.snapshot.flake8.total_issues, 2);
}

#[test]
fn test_json_failure_does_not_block_html() {
    let mut ws = Workspace::new();
    // A directory where the JSON file should go makes the write fail
    ws.config.outputs.json = "taken".to_string();
    fs::create_dir_all(ws.config.outputs.json_path()).unwrap();

    let report = ws.run();

    let json = report.output(ReportFormat::Json).unwrap();
    assert!(matches!(json.state, OutputState::Failed(_)));
    let html = report.output(ReportFormat::Html).unwrap();
    assert_eq!(html.state, OutputState::Written);
    assert!(ws.config.outputs.html_path().is_file());
    assert!(report.is_degraded());
}

#[test]
fn test_json_output_matches_snapshot() {
    let ws = Workspace::new();
    seed::write_placeholder_inputs(&ws.config, false).unwrap();
    let started = Utc::now();

    let report = ws.run();

    let written = fs::read_to_string(ws.config.outputs.json_path()).unwrap();
    let reparsed: DashboardSnapshot = serde_json::from_str(&written).unwrap();
    assert_eq!(reparsed, report.snapshot);

    let generated_at = reparsed.generated_at().expect("RFC 3339 timestamp");
    let drift = (generated_at - started).num_seconds().abs();
    assert!(drift < 60, "timestamp drifted {drift}s from run start");
}

#[test]
fn test_json_output_keeps_fractional_coverage() {
    let ws = Workspace::new();
    ws.write_input(
        "coverage.xml",
        r#"<coverage line-rate="0.8523"><packages><package name="p"><classes><class name="c"><lines>
            <line number="1" hits="1"/>
        </lines></class></classes></package></packages></coverage>"#,
    );

    let report = ws.run();

    let written = fs::read_to_string(ws.config.outputs.json_path()).unwrap();
    let reparsed: DashboardSnapshot = serde_json::from_str(&written).unwrap();
    assert_eq!(reparsed.coverage.coverage_percentage, 0.8523 * 100.0);
    assert_eq!(reparsed, report.snapshot);
}

#[test]
fn test_html_output_embeds_snapshot() {
    let ws = Workspace::new();
    seed::write_placeholder_inputs(&ws.config, false).unwrap();

    let report = ws.run();

    let html = fs::read_to_string(ws.config.outputs.html_path()).unwrap();
    assert!(html.contains(&report.snapshot.generation_timestamp));
    assert!(html.contains("Overall Coverage: <strong>85.00%</strong>"));
    assert!(html.contains("Total Flake8 Issues: <strong>1</strong>"));
}

#[test]
fn test_run_at_uses_given_instant() {
    use chrono::TimeZone;

    let ws = Workspace::new();
    let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let report = Aggregator::new(ws.config.clone()).run_at(instant);

    assert_eq!(report.snapshot.generation_timestamp, "2024-01-02T03:04:05.000000Z");
}

#[test]
fn test_runs_are_idempotent() {
    let ws = Workspace::new();
    seed::write_placeholder_inputs(&ws.config, false).unwrap();
    let aggregator = Aggregator::new(ws.config.clone());
    let instant = Utc::now();

    let first = aggregator.run_at(instant);
    let first_json = fs::read_to_string(ws.config.outputs.json_path()).unwrap();
    let second = aggregator.run_at(instant);
    let second_json = fs::read_to_string(ws.config.outputs.json_path()).unwrap();

    assert_eq!(first.snapshot, second.snapshot);
    assert_eq!(first_json, second_json);
}
