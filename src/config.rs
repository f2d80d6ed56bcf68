//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/campus/campus.toml`
//! 3. Local config: `<dir>/.campus.toml`
//! 4. Environment variables: `CAMPUS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::services::DEFAULT_INDENT;
use crate::application::ApplicationError;

const APP_NAME: &str = "campus";
const DATA_FILE_NAME: &str = "institute_data.json";

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub indent: Option<usize>,
}

/// Unified configuration for campus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Institute data file used when no explicit path is given
    pub data_file: PathBuf,
    /// Spaces per nesting level in saved JSON
    pub indent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Default data file: `<XDG data dir>/campus/institute_data.json`.
fn default_data_file() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

/// Get the XDG config directory for campus.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("campus.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".campus.toml")
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_file.to_string_lossy().as_ref());
        self.data_file = PathBuf::from(expanded);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay
                .data_file
                .clone()
                .unwrap_or_else(|| self.data_file.clone()),
            indent: overlay.indent.unwrap_or(self.indent),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.campus.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/campus/campus.toml`
    /// 3. Local config: `<local_dir>/.campus.toml`
    /// 4. Environment variables: `CAMPUS_DATA_FILE`, `CAMPUS_INDENT`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply CAMPUS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("CAMPUS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_int("indent") {
            settings.indent = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("CAMPUS_INDENT must not be negative, got {val}"),
            })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# campus configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/campus/campus.toml
#   Local:  <dir>/.campus.toml
#   Env:    CAMPUS_* environment variables (explicit overrides)

# Institute data file used when --file is not given (~ and $VAR are expanded)
# data_file = "~/.local/share/campus/institute_data.json"

# Spaces per nesting level in saved JSON
# indent = 2
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_points_to_json_data_file() {
        let settings = Settings::default();
        assert!(settings.data_file.ends_with(DATA_FILE_NAME));
        assert_eq!(settings.indent, 2);
    }

    #[test]
    fn given_tilde_in_data_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            data_file: PathBuf::from("~/campus/data.json"),
            indent: 2,
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let data_file = settings.data_file.to_string_lossy();
        assert!(
            data_file.starts_with(&home),
            "data_file should start with home dir: {}",
            data_file
        );
        assert!(!data_file.contains('~'));
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings {
            data_file: PathBuf::from("/tmp/base.json"),
            indent: 2,
        };
        let overlay = RawSettings {
            data_file: None,
            indent: Some(4),
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.data_file, PathBuf::from("/tmp/base.json"));
        assert_eq!(result.indent, 4);
    }

    #[test]
    fn given_settings_when_rendering_toml_then_contains_all_fields() {
        let settings = Settings {
            data_file: PathBuf::from("/tmp/institute.json"),
            indent: 3,
        };

        let rendered = settings.to_toml().unwrap();

        assert!(rendered.contains("data_file = \"/tmp/institute.json\""));
        assert!(rendered.contains("indent = 3"));
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.data_file.is_none());
        assert!(raw.indent.is_none());
    }
}
