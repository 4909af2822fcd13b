//! Host platform detection
//!
//! Maps the host OS to the arduino-cli executable file name.

use std::env::consts::OS;
use std::str::FromStr;

use crate::config::defaults::{UNIX_EXECUTABLE, WINDOWS_EXECUTABLE};
use crate::error::CliError;

/// Platform families with a known arduino-cli executable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Detect the platform this process runs on
    pub fn current() -> Result<Self, CliError> {
        OS.parse()
    }

    /// Executable file name on this platform
    pub fn executable_name(self) -> &'static str {
        match self {
            Platform::Linux | Platform::MacOs => UNIX_EXECUTABLE,
            Platform::Windows => WINDOWS_EXECUTABLE,
        }
    }
}

impl FromStr for Platform {
    type Err = CliError;

    fn from_str(os: &str) -> Result<Self, Self::Err> {
        match os {
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "windows" | "win32" => Ok(Platform::Windows),
            other => Err(CliError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }
}
