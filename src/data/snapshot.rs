//! Merged, timestamped dashboard snapshot

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{CoverageMetrics, LintMetrics};

/// Aggregate of every parsed report for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// ISO-8601 UTC instant with a trailing `Z`
    pub generation_timestamp: String,

    pub coverage: CoverageMetrics,

    /// Classified issues from the JSON lint report
    pub pylint: LintMetrics,

    /// Issue total from the plain-text lint report
    pub flake8: LintMetrics,
}

impl DashboardSnapshot {
    /// Merge the parsed records under a generation instant
    pub fn new(
        coverage: CoverageMetrics,
        pylint: LintMetrics,
        flake8: LintMetrics,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generation_timestamp: format_timestamp(generated_at),
            coverage,
            pylint,
            flake8,
        }
    }

    /// Parse the stored timestamp back into an instant
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.generation_timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Issues across both lint tools
    pub fn total_lint_issues(&self) -> u64 {
        self.pylint.total_issues + self.flake8.total_issues
    }
}

/// Microsecond precision, `Z` suffix: `2026-10-18T09:30:00.123456Z`
pub(crate) fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}
