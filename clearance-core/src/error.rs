//! Error types for Clearance core.
//!
//! The engine itself is total and never fails; errors only arise at the
//! intake boundary when loading and parsing a submission file.

use std::{error::Error, fmt, io};

/// Error type for Clearance core operations.
#[derive(Debug)]
pub enum ClearanceError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A submission file that could not be parsed.
    Parse(serde_json::Error),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for ClearanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Parse(err) => write!(f, "invalid submission: {err}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ClearanceError {}

impl From<io::Error> for ClearanceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ClearanceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Convenience result type for Clearance core.
pub type Result<T> = std::result::Result<T, ClearanceError>;
