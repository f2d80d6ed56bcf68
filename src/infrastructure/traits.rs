//! Filesystem boundary used by the persistence service and `config init`
//!
//! Services hold an `Arc<dyn FileSystem>` so tests can swap in fakes.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Move `from` onto `to`, replacing `to` if it exists.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create the directories above `path` if they are missing.
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.exists(parent) => {
                self.create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }

    /// Write `content` next to `path` first, then rename it into place, so an
    /// interrupted save never leaves a truncated data file behind.
    fn replace(&self, path: &Path, content: &str) -> io::Result<()> {
        let staging = staging_path(path);
        self.write(&staging, content)?;
        self.rename(&staging, path)
    }
}

/// `data/institute.json` → `data/.institute.json.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or(path.as_os_str()));
    name.push(".tmp");
    path.with_file_name(name)
}

#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_nested_target_when_ensuring_parent_then_creates_directories() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/institute.json");

        RealFileSystem.ensure_parent(&target).unwrap();

        assert!(temp.path().join("a/b").is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn given_bare_file_name_when_ensuring_parent_then_is_noop() {
        RealFileSystem
            .ensure_parent(Path::new("institute.json"))
            .unwrap();
    }

    #[test]
    fn given_existing_file_when_replacing_then_overwrites_and_leaves_no_staging_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("institute.json");
        std::fs::write(&target, "old").unwrap();

        RealFileSystem.replace(&target, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert!(!temp.path().join(".institute.json.tmp").exists());
    }

    #[test]
    fn given_data_file_path_when_staging_then_uses_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("data/institute.json")),
            PathBuf::from("data/.institute.json.tmp")
        );
    }
}
