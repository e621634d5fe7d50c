//! Flake8-style plain-text report parser: one issue per non-blank line

use std::path::Path;

use super::error::{ParseError, read_report};
use crate::data::LintMetrics;

pub fn parse_lint_text(path: &Path) -> Result<LintMetrics, ParseError> {
    let text = read_report(path)?;
    Ok(parse_lint_text_str(&text))
}

pub fn parse_lint_text_str(text: &str) -> LintMetrics {
    // Bare `\r` also ends a line
    let total = text
        .split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .count();
    LintMetrics::total_only(total as u64)
}
