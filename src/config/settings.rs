//! User settings management
//!
//! Reads optional defaults for the binding from `config.toml` in the arducli
//! config directory: where arduino-cli lives, which user/data directories to
//! bind it to, and how long a single invocation may run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SettingsError;
use crate::infra::dirs::ArducliDirs;

/// Settings for arducli
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Tool location and bound directories
    #[serde(default)]
    pub tool: ToolSettings,

    /// Invocation limits
    #[serde(default)]
    pub invocation: InvocationSettings,
}

/// arduino-cli installation and directory bindings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Directory containing the arduino-cli executable
    pub binary_dir: Option<PathBuf>,

    /// Directory where `arduino-cli.yaml` is kept
    pub config_dir: Option<PathBuf>,

    /// arduino-cli `user` directory (sketch root)
    pub user_dir: Option<PathBuf>,

    /// arduino-cli `data` directory
    pub data_dir: Option<PathBuf>,
}

/// Limits applied to each invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvocationSettings {
    /// Timeout per invocation in seconds
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from the platform config directory
    ///
    /// A missing file yields the defaults.
    pub fn load(dirs: &ArducliDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.settings_path())
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Get the configured invocation timeout
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.invocation.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(&temp_dir.path().join("config.toml")).unwrap();
        assert!(settings.tool.binary_dir.is_none());
        assert!(settings.timeout().is_none());
    }

    #[test]
    fn test_load_valid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[tool]
binary_dir = "/opt/arduino"
user_dir = "/home/me/sketches"

[invocation]
timeout_secs = 90
"#,
        )
        .unwrap();

        let settings = Settings::load_from_path(&path).unwrap();
        assert_eq!(settings.tool.binary_dir, Some(PathBuf::from("/opt/arduino")));
        assert_eq!(
            settings.tool.user_dir,
            Some(PathBuf::from("/home/me/sketches"))
        );
        assert!(settings.tool.data_dir.is_none());
        assert_eq!(settings.timeout(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "invalid toml [[[").unwrap();

        let result = Settings::load_from_path(&path);
        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }
}
