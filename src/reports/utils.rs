//! Common utilities for report generation

/// HTML escape a string for safe inclusion in HTML
pub fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Format a percentage with two decimals, e.g. `85.00%`
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}
