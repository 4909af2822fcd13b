//! Error types for arducli
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Convenience alias used throughout the library
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read settings file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse settings file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Top-level arducli error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Required initialization input is missing
    #[error("{message}")]
    Validation { message: String },

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Host OS has no known arduino-cli executable name
    #[error("Unsupported platform '{os}': no arduino-cli executable name is known for it")]
    UnsupportedPlatform { os: String },

    /// The subprocess could not be launched
    #[error("Failed to launch '{invocation}': {error}")]
    Spawn { invocation: String, error: String },

    /// The subprocess exited unsuccessfully
    #[error("'{invocation}' exited with {status}: {stderr}")]
    Execution {
        invocation: String,
        status: String,
        stderr: String,
    },

    /// Standard output was not valid JSON
    #[error("Failed to parse JSON output of '{invocation}': {error}")]
    Parse {
        invocation: String,
        error: String,
        stdout: String,
    },

    /// Standard output was empty where JSON was expected
    #[error("'{invocation}' produced no output")]
    EmptyOutput { invocation: String },

    /// The subprocess did not finish in time
    #[error("'{invocation}' timed out after {after:?}")]
    Timeout { invocation: String, after: Duration },

    /// The call was cancelled by the caller
    #[error("'{invocation}' was cancelled")]
    Cancelled { invocation: String },

    /// The persisted arduino-cli.yaml could not be (de)serialized
    #[error("Invalid tool config '{path}': {error}")]
    ToolConfig { path: PathBuf, error: String },

    /// Settings error
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The tool reported a version string that is not semver
    #[error("Unrecognized arduino-cli version '{version}': {error}")]
    Version { version: String, error: String },
}

impl CliError {
    /// Create a validation error from a message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Captured standard error text, if this failure carries any
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Execution { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Whether this failure came from JSON decoding rather than the tool itself
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::EmptyOutput { .. })
    }
}
