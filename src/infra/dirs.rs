//! Platform-specific directory management
//!
//! Provides platform-specific paths for the arducli settings file and for the
//! default arduino-cli user/data directories.
//!
//! Environment variables can override default directories:
//! - `ARDUCLI_CONFIG_DIR` - Override config directory
//! - `ARDUCLI_DATA_DIR` - Override data directory

use std::env;
use std::path::PathBuf;

use crate::config::defaults::SETTINGS_FILE;

/// Environment variable names for directory overrides
pub const ENV_CONFIG_DIR: &str = "ARDUCLI_CONFIG_DIR";
pub const ENV_DATA_DIR: &str = "ARDUCLI_DATA_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "arducli";

/// Subdirectory names
const SKETCHES_SUBDIR: &str = "sketches";
const TOOL_DATA_SUBDIR: &str = "data";

/// Platform-specific directory provider for arducli
///
/// Follows XDG on Linux and the Library folders on macOS.
#[derive(Debug, Clone)]
pub struct ArducliDirs {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl ArducliDirs {
    /// Create a new `ArducliDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            data_dir: Self::resolve_data_dir(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/arducli` or `~/.config/arducli`
    /// - macOS: `~/Library/Application Support/arducli`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the data directory path
    ///
    /// - Linux: `$XDG_DATA_HOME/arducli` or `~/.local/share/arducli`
    /// - macOS: `~/Library/Application Support/arducli`
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Default arduino-cli `user` directory (sketchbook root)
    #[must_use]
    pub fn default_user_dir(&self) -> PathBuf {
        self.data_dir.join(SKETCHES_SUBDIR)
    }

    /// Default arduino-cli `data` directory (cores, indexes)
    #[must_use]
    pub fn default_tool_data_dir(&self) -> PathBuf {
        self.data_dir.join(TOOL_DATA_SUBDIR)
    }

    /// Path of the arducli settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    fn resolve_data_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_DATA_DIR) {
            return PathBuf::from(path);
        }

        dirs::data_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".local").join("share").join(APP_NAME))
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join(APP_NAME)
                    })
            })
    }
}

impl Default for ArducliDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_new_creates_instance() {
        let dirs = ArducliDirs::new();
        assert!(!dirs.config_dir().as_os_str().is_empty());
        assert!(!dirs.data_dir().as_os_str().is_empty());
    }

    #[test]
    fn test_default_tool_dirs_are_under_data_dir() {
        let dirs = ArducliDirs::new();
        assert!(dirs.default_user_dir().starts_with(dirs.data_dir()));
        assert!(dirs.default_tool_data_dir().starts_with(dirs.data_dir()));
        assert_ne!(dirs.default_user_dir(), dirs.default_tool_data_dir());
    }

    #[test]
    fn test_settings_path_is_under_config_dir() {
        let dirs = ArducliDirs::new();
        assert!(dirs.settings_path().starts_with(dirs.config_dir()));
        assert!(dirs.settings_path().ends_with("config.toml"));
    }
}
