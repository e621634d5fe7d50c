//! Per-input and per-output outcome of a generation run

use std::fmt;
use std::path::PathBuf;

use crate::data::DashboardSnapshot;
use crate::parsers::ParseError;
use crate::reports::ReportFormat;

/// Which report an input status refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    Coverage,
    Pylint,
    Flake8,
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportSource::Coverage => "coverage",
            ReportSource::Pylint => "pylint",
            ReportSource::Flake8 => "flake8",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputState {
    Parsed,
    /// File absent; default record used
    Missing,
    /// File present but unusable; default record used
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStatus {
    pub source: ReportSource,
    pub path: PathBuf,
    pub state: InputState,
}

impl InputStatus {
    pub(crate) fn from_error(source: ReportSource, error: &ParseError) -> Self {
        let state = if error.is_missing() {
            InputState::Missing
        } else {
            InputState::Malformed(error.to_string())
        };
        Self {
            source,
            path: error.path().to_path_buf(),
            state,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.state != InputState::Parsed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputState {
    Written,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStatus {
    pub format: ReportFormat,
    pub path: PathBuf,
    pub state: OutputState,
}

impl OutputStatus {
    pub fn is_written(&self) -> bool {
        self.state == OutputState::Written
    }
}

/// Structured result of one aggregation run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The snapshot both outputs were rendered from
    pub snapshot: DashboardSnapshot,
    pub inputs: Vec<InputStatus>,
    pub outputs: Vec<OutputStatus>,
}

impl RunReport {
    /// `true` when any input fell back to its default or any output failed
    pub fn is_degraded(&self) -> bool {
        self.inputs.iter().any(InputStatus::is_degraded)
            || self.outputs.iter().any(|o| !o.is_written())
    }

    pub fn input(&self, source: ReportSource) -> Option<&InputStatus> {
        self.inputs.iter().find(|i| i.source == source)
    }

    pub fn output(&self, format: ReportFormat) -> Option<&OutputStatus> {
        self.outputs.iter().find(|o| o.format == format)
    }
}
