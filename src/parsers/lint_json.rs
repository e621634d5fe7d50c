//! Pylint-style JSON issue report parser

use serde::Deserialize;
use std::path::Path;

use super::error::{ParseError, read_report};
use crate::data::{LintMetrics, SeverityBreakdown};

/// The only field we need from each issue; everything else is ignored
#[derive(Debug, Deserialize)]
struct LintIssue {
    #[serde(rename = "type")]
    kind: String,
}

/// Parse a JSON array of issues into classified counts
pub fn parse_lint_json(path: &Path) -> Result<LintMetrics, ParseError> {
    let text = read_report(path)?;
    parse_lint_json_str(&text, path)
}

pub fn parse_lint_json_str(text: &str, path: &Path) -> Result<LintMetrics, ParseError> {
    let issues: Vec<LintIssue> =
        serde_json::from_str(text).map_err(|source| ParseError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut breakdown = SeverityBreakdown::default();
    for issue in &issues {
        if !breakdown.record(&issue.kind) {
            tracing::trace!("Unclassified lint issue type: {}", issue.kind);
        }
    }

    Ok(LintMetrics {
        total_issues: issues.len() as u64,
        breakdown: Some(breakdown),
    })
}
