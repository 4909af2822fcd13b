//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests, most
//! importantly a fake `arduino-cli` executable written as a shell script.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

use arducli::core::platform::Platform;
use arducli::{CliOptions, Directories};

/// Fake tool that echoes its arguments back as JSON
pub const ECHO_ARGS: &str = r#"printf '{"args":"%s"}\n' "$*""#;

/// Fake tool that fails with a message on stderr
pub const FAIL_WITH_STDERR: &str = r#"echo "Error: platform arduino:avr is not installed" >&2
exit 1"#;

/// Fake tool that prints plain text instead of JSON
pub const PRINT_TEXT: &str = r#"echo "Arduino CLI 0.35.3""#;

/// Fake tool that prints nothing
pub const PRINT_NOTHING: &str = "exit 0";

/// Fake tool that never finishes on its own
pub const HANG: &str = "sleep 30";

/// Fake tool that reports a version
pub const PRINT_VERSION: &str = r#"printf '{"Application":"arduino-cli","VersionString":"0.35.3","Commit":"95cfd654","Status":"alpha"}\n'"#;

/// Fake tool that prints a completion script
pub const PRINT_COMPLETION: &str = r#"printf '# bash completion for arduino-cli\ncomplete -F _arduino-cli arduino-cli\n'"#;

/// Test project context
///
/// Creates a temporary directory laid out like an arduino-cli install:
/// `arduino/` holds the executable and config, with `sketches/` and `data/`
/// below it.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Directory that holds the fake executable
    pub fn binary_dir(&self) -> PathBuf {
        self.path().join("arduino")
    }

    pub fn user_dir(&self) -> PathBuf {
        self.binary_dir().join("sketches")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.binary_dir().join("data")
    }

    pub fn config_file(&self) -> PathBuf {
        self.binary_dir().join("arduino-cli.yaml")
    }

    /// Options binding the project's directories
    pub fn options(&self) -> CliOptions {
        CliOptions::new()
            .with_binary_dir(self.binary_dir())
            .with_directories(Directories::new(self.user_dir(), self.data_dir()))
            .with_platform(Platform::Linux)
    }

    /// Write the fake `arduino-cli` with the given shell body
    #[cfg(unix)]
    pub fn install_tool(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.binary_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create binary directory");
        let path = dir.join("arduino-cli");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
        path
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
