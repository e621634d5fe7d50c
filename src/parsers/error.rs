//! Typed parser failures

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a report could not be turned into metrics
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("report not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid XML in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected content in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl ParseError {
    /// `true` when the report file does not exist, as opposed to failing to parse
    pub fn is_missing(&self) -> bool {
        matches!(self, ParseError::Missing { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            ParseError::Missing { path }
            | ParseError::Io { path, .. }
            | ParseError::Xml { path, .. }
            | ParseError::Json { path, .. }
            | ParseError::Invalid { path, .. } => path,
        }
    }

    pub(crate) fn invalid(path: &Path, reason: impl Into<String>) -> Self {
        ParseError::Invalid {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Read a report into memory, mapping a missing file to [`ParseError::Missing`]
pub(crate) fn read_report(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ParseError::Missing {
            path: path.to_path_buf(),
        },
        _ => ParseError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
