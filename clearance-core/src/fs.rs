//! Filesystem abstractions used for submission intake.

use std::path::Path;

use crate::domain::Submission;
use crate::error::Result;

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Load a submission snapshot from a camelCase JSON file.
///
/// Unknown provenance strings are accepted as-is; the engine degrades them to
/// default classifications. Missing fields take their defaults, so a partial
/// submission file is valid.
pub fn load_submission<F: FileSystem>(fs: &F, path: &Path) -> Result<Submission> {
    let contents = fs.read_to_string(path)?;
    let submission = serde_json::from_str(&contents)?;
    Ok(submission)
}
