//! Cobertura-style coverage XML parser
//!
//! Reads the overall `line-rate` from the root element and walks
//! `packages/package/classes/class/lines/line` for per-line accounting.

use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

use super::error::{ParseError, read_report};
use crate::data::CoverageMetrics;

/// Parse a coverage report file
pub fn parse_coverage_xml(path: &Path) -> Result<CoverageMetrics, ParseError> {
    let text = read_report(path)?;
    parse_coverage_str(&text, path)
}

/// Parse coverage XML already in memory; `path` is only used for error reporting
pub fn parse_coverage_str(text: &str, path: &Path) -> Result<CoverageMetrics, ParseError> {
    // Cobertura writers emit a DOCTYPE pointing at coverage-04.dtd
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).map_err(|source| ParseError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    let root = doc.root_element();

    let mut metrics = CoverageMetrics {
        coverage_percentage: line_rate(root, path)? * 100.0,
        ..Default::default()
    };

    // No <packages> means no per-line data, not a broken report
    let Some(packages) = child(root, "packages") else {
        return Ok(metrics);
    };

    for package in children(packages, "package") {
        let classes = child(package, "classes").ok_or_else(|| {
            let name = package.attribute("name").unwrap_or("<unnamed>");
            ParseError::invalid(path, format!("package '{name}' has no <classes> element"))
        })?;

        for class in children(classes, "class") {
            let Some(lines) = child(class, "lines") else {
                continue;
            };
            for line in children(lines, "line") {
                tally_line(line, &mut metrics);
            }
        }
    }

    Ok(metrics)
}

fn line_rate(root: Node<'_, '_>, path: &Path) -> Result<f64, ParseError> {
    let Some(raw) = root.attribute("line-rate") else {
        return Ok(0.0);
    };
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ParseError::invalid(path, format!("line-rate '{raw}' is not a number")))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ParseError::invalid(
            path,
            format!("line-rate {rate} is outside 0..=1"),
        ));
    }
    Ok(rate)
}

fn tally_line(line: Node<'_, '_>, metrics: &mut CoverageMetrics) {
    metrics.lines_total += 1;
    // Only the literal "0" means missed; an absent attribute counts as covered
    if line.attribute("hits") != Some("0") {
        metrics.lines_covered += 1;
    }

    if line.attribute("branch") == Some("true") {
        match line.attribute("condition-coverage").and_then(parse_condition_coverage) {
            Some((covered, total)) => {
                metrics.branches_covered += covered;
                metrics.branches_total += total;
            }
            None => tracing::debug!(
                "Ignoring branch line without usable condition-coverage: {:?}",
                line.attribute("number")
            ),
        }
    }
}

/// Parse `"50% (1/2)"` into `(1, 2)`
fn parse_condition_coverage(raw: &str) -> Option<(u64, u64)> {
    let inner = raw.split_once('(')?.1.split_once(')')?.0;
    let (covered, total) = inner.split_once('/')?;
    let covered: u64 = covered.trim().parse().ok()?;
    let total: u64 = total.trim().parse().ok()?;
    (covered <= total).then_some((covered, total))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.has_tag_name(name))
}
