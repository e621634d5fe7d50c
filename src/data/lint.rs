//! Lint issue counts, shared by every lint report format

use serde::{Deserialize, Serialize};

/// Issue counts for one lint tool
///
/// Reports that classify issues (pylint JSON) carry a [`SeverityBreakdown`];
/// line-oriented reports (flake8 text) only know the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintMetrics {
    pub total_issues: u64,

    #[serde(flatten)]
    pub breakdown: Option<SeverityBreakdown>,
}

/// Per-severity issue counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub errors: u64,
    pub warnings: u64,
    pub refactor: u64,
    pub convention: u64,
}

impl SeverityBreakdown {
    /// Increment the bucket matching `kind` (case-insensitive).
    /// Returns `false` when the kind has no bucket.
    pub fn record(&mut self, kind: &str) -> bool {
        match kind.to_ascii_lowercase().as_str() {
            "error" => self.errors += 1,
            "warning" => self.warnings += 1,
            "refactor" => self.refactor += 1,
            "convention" => self.convention += 1,
            _ => return false,
        }
        true
    }

    pub fn classified(&self) -> u64 {
        self.errors + self.warnings + self.refactor + self.convention
    }
}

impl LintMetrics {
    /// Metrics for a report without severity information
    pub fn total_only(total_issues: u64) -> Self {
        Self {
            total_issues,
            breakdown: None,
        }
    }

    /// All-zero metrics for a classifying report
    pub fn empty_breakdown() -> Self {
        Self {
            total_issues: 0,
            breakdown: Some(SeverityBreakdown::default()),
        }
    }

    /// Issues that did not fall into any severity bucket
    pub fn unclassified(&self) -> u64 {
        let classified = self.breakdown.map(|b| b.classified()).unwrap_or(0);
        self.total_issues.saturating_sub(classified)
    }
}
