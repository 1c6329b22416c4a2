//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

/// Every failure is fatal; only the first two have a dedicated exit code.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("No test results found.")]
    EmptyResultSet,

    #[error("Failed to parse report JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::MissingInputFile(_) | ReportError::EmptyResultSet => 1,
            ReportError::Parse(_) | ReportError::Io { .. } => 2,
        }
    }
}
