//! Format-specific report parsers
//!
//! Each parser returns a typed [`ParseError`] instead of a silent default so
//! callers can tell an absent report from a broken one.

mod coverage;
mod error;
mod lint_json;
mod lint_text;

pub use coverage::{parse_coverage_str, parse_coverage_xml};
pub use error::ParseError;
pub use lint_json::{parse_lint_json, parse_lint_json_str};
pub use lint_text::{parse_lint_text, parse_lint_text_str};
