//! Institute persistence service
//!
//! Saves and loads the whole institute tree as a single pretty-printed JSON
//! document. The target path is always passed in by the caller.

use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt, JsonResultExt};
use crate::domain::{DomainError, Institute, NamedEntity};
use crate::infrastructure::traits::FileSystem;

/// Default number of spaces per nesting level in saved files.
pub const DEFAULT_INDENT: usize = 2;

/// Service for saving and loading institute data files.
pub struct PersistenceService {
    fs: Arc<dyn FileSystem>,
    indent: usize,
}

impl PersistenceService {
    /// Create a new persistence service.
    pub fn new(fs: Arc<dyn FileSystem>, indent: usize) -> Self {
        Self { fs, indent }
    }

    /// Whether a data file exists at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    /// Serialize `institute` and replace the file at `path`, creating parent directories.
    #[instrument(level = "debug", skip(self, institute), fields(institute = institute.name()))]
    pub fn save(&self, institute: &Institute, path: &Path) -> ApplicationResult<()> {
        let content = self.render(&institute.to_plain(), path)?;

        self.fs
            .ensure_parent(path)
            .with_path_context("create parent directory", path)?;
        self.fs
            .replace(path, &content)
            .with_path_context("write institute data", path)?;

        info!("saved institute '{}' to {}", institute.name(), path.display());
        Ok(())
    }

    /// Read, parse and rebuild an institute from `path`.
    ///
    /// I/O failures, malformed JSON and invalid institute data are reported as
    /// distinct error variants.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Institute> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read institute data", path)?;

        let raw: Value = serde_json::from_str(&content).with_source_file(path)?;
        if !raw.is_object() {
            return Err(DomainError::format(
                Institute::KIND,
                "serialized institute data must be a JSON object",
            )
            .into());
        }

        let institute = Institute::from_plain(&raw)?;
        debug!(
            "loaded institute '{}' with {} courses",
            institute.name(),
            institute.courses().len()
        );
        Ok(institute)
    }

    fn render(&self, value: &Value, path: &Path) -> ApplicationResult<String> {
        let indent = vec![b' '; self.indent];
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        value
            .serialize(&mut serializer)
            .map_err(io::Error::from)
            .with_path_context("serialize institute data", path)?;
        buf.push(b'\n');

        String::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            .with_path_context("serialize institute data", path)
    }
}
