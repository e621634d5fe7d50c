//! # qdash - quality dashboards from CI report artifacts
//!
//! qdash turns the reports a Python CI pipeline already produces into one
//! snapshot and one static page:
//!
//! - **Coverage**: Cobertura-style `coverage.xml` (line and branch counts)
//! - **Pylint**: JSON issue array, classified by severity
//! - **Flake8**: plain-text report, one issue per line
//!
//! Every input is optional. A missing or broken report is replaced by zero
//! values and noted in the [`RunReport`](aggregator::RunReport), so the
//! dashboard is always produced.
//!
//! ## Quick Start
//!
//! ```bash
//! # Try it with placeholder inputs
//! qdash seed
//! qdash generate
//!
//! # Point at real CI artifacts and fail the job on missing data
//! qdash generate --input-dir ci/reports --output-dir public --strict
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use qdash::aggregator::Aggregator;
//! use qdash::config::DashboardConfig;
//!
//! let config = DashboardConfig::with_dirs("reports_input", "dashboard_output");
//! let report = Aggregator::new(config).run();
//!
//! println!("coverage: {:.2}%", report.snapshot.coverage.coverage_percentage);
//! if report.is_degraded() {
//!     eprintln!("some inputs or outputs degraded");
//! }
//! ```

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod data;
pub mod parsers;
pub mod reports;
pub mod seed;

pub use cli::{Cli, Output};
pub use config::DashboardConfig;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
