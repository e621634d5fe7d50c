//! Data structures for parsed metrics and the merged dashboard snapshot

mod coverage;
mod lint;
mod snapshot;

// Public exports
pub use coverage::CoverageMetrics;
pub use lint::{LintMetrics, SeverityBreakdown};
pub use snapshot::DashboardSnapshot;
