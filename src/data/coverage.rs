//! Line and branch coverage metrics

use serde::{Deserialize, Serialize};

/// Coverage metrics extracted from a coverage XML report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    /// Overall line coverage in percent (0-100), taken from the root `line-rate`
    pub coverage_percentage: f64,

    /// Number of `line` elements seen
    pub lines_total: u64,

    /// Number of `line` elements with non-zero hits
    pub lines_covered: u64,

    /// Branch outcomes declared by `condition-coverage` attributes
    #[serde(default)]
    pub branches_total: u64,

    /// Branch outcomes actually taken
    #[serde(default)]
    pub branches_covered: u64,
}

impl CoverageMetrics {
    /// Lines that were never executed
    pub fn lines_missed(&self) -> u64 {
        self.lines_total.saturating_sub(self.lines_covered)
    }

    /// Branch coverage in percent, `None` when the report declares no branches
    pub fn branch_percentage(&self) -> Option<f64> {
        if self.branches_total == 0 {
            return None;
        }
        Some(self.branches_covered as f64 / self.branches_total as f64 * 100.0)
    }
}
