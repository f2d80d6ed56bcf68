//! Path-aware conversions from low-level results into `ApplicationResult`
//!
//! Every failure touching the data file names the file, so callers never
//! build `ApplicationError::Io` or `ApplicationError::Parse` by hand.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Attach the attempted action and the file to an I/O failure.
pub trait IoResultExt<T> {
    /// ```ignore
    /// fs.read_to_string(&path)
    ///     .with_path_context("read institute data", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: format!("{action}: {}", path.display()),
            source,
        })
    }
}

/// Report malformed JSON together with the file it came from.
pub trait JsonResultExt<T> {
    fn with_source_file(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> JsonResultExt<T> for serde_json::Result<T> {
    fn with_source_file(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
