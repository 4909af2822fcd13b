//! arduino-cli config file
//!
//! The YAML document arduino-cli reads through `--config-file`. Only the
//! `directories` section is managed here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::infra::filesystem;

/// The arduino-cli `user` and `data` directory pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directories {
    /// Sketchbook root; sketch names resolve under it
    pub user: PathBuf,
    /// Cores, tools and package indexes
    pub data: PathBuf,
}

impl Directories {
    pub fn new(user: impl Into<PathBuf>, data: impl Into<PathBuf>) -> Self {
        Self {
            user: user.into(),
            data: data.into(),
        }
    }
}

/// Contents of `arduino-cli.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub directories: Directories,
}

impl ToolConfig {
    pub fn new(directories: Directories) -> Self {
        Self { directories }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Read a config file back
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = filesystem::read_file(path)?;
        serde_yaml::from_str(&content).map_err(|e| CliError::ToolConfig {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Write the file unless one already exists at `path`
    ///
    /// An existing file is left untouched even if its contents differ.
    /// Returns `true` when the file was written.
    pub fn write_if_absent(&self, path: &Path) -> Result<bool, CliError> {
        let yaml = self.to_yaml().map_err(|e| CliError::ToolConfig {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Ok(filesystem::write_new_file(path, &yaml)?)
    }
}
