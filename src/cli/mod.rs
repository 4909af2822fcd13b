//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::settings::Settings;
use crate::core::facade::CliOptions;
use crate::core::tool_config::Directories;
use crate::infra::dirs::ArducliDirs;
use commands::Commands;
use output::OutputConfig;

/// Arducli - drive arduino-cli and get JSON back
#[derive(Parser, Debug)]
#[command(name = "arducli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print compact single-line JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory containing the arduino-cli executable
    #[arg(long, env = "ARDUCLI_BINARY_DIR", global = true)]
    pub binary_dir: Option<PathBuf>,

    /// Directory holding arduino-cli.yaml (defaults to the binary directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// arduino-cli user directory (sketch root)
    #[arg(long, env = "ARDUCLI_TOOL_USER_DIR", global = true)]
    pub user_dir: Option<PathBuf>,

    /// arduino-cli data directory
    #[arg(long, env = "ARDUCLI_TOOL_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Abort an arduino-cli call after this many seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = OutputConfig::new(self.quiet, self.json);
        let dirs = ArducliDirs::new();
        let settings = Settings::load(&dirs)?;
        let options = self.options(&dirs, &settings);

        if let Some(cmd) = self.command {
            cmd.run(options, &output).await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }

    /// Merge flags, settings file and platform defaults
    ///
    /// Priority: CLI flags > settings file > platform defaults.
    pub fn options(&self, dirs: &ArducliDirs, settings: &Settings) -> CliOptions {
        let tool = &settings.tool;

        let user = self
            .user_dir
            .clone()
            .or_else(|| tool.user_dir.clone())
            .unwrap_or_else(|| dirs.default_user_dir());
        let data = self
            .data_dir
            .clone()
            .or_else(|| tool.data_dir.clone())
            .unwrap_or_else(|| dirs.default_tool_data_dir());

        CliOptions {
            binary_dir: self.binary_dir.clone().or_else(|| tool.binary_dir.clone()),
            directories: Some(Directories::new(user, data)),
            config_dir: self.config_dir.clone().or_else(|| tool.config_dir.clone()),
            timeout: self
                .timeout
                .map(Duration::from_secs)
                .or_else(|| settings.timeout()),
            platform: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{InvocationSettings, ToolSettings};

    fn settings() -> Settings {
        Settings {
            tool: ToolSettings {
                binary_dir: Some(PathBuf::from("/opt/settings")),
                config_dir: None,
                user_dir: Some(PathBuf::from("/srv/settings-user")),
                data_dir: None,
            },
            invocation: InvocationSettings {
                timeout_secs: Some(60),
            },
        }
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from([
            "arducli",
            "--binary-dir",
            "/opt/flag",
            "--timeout",
            "5",
            "version",
        ]);
        let options = cli.options(&ArducliDirs::new(), &settings());

        assert_eq!(options.binary_dir, Some(PathBuf::from("/opt/flag")));
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_settings_fill_missing_flags() {
        let cli = Cli::parse_from(["arducli", "--user-dir", "/srv/flag-user", "version"]);
        let dirs = ArducliDirs::new();
        let options = cli.options(&dirs, &settings());
        let directories = options.directories.unwrap();

        assert_eq!(directories.user, PathBuf::from("/srv/flag-user"));
        assert_eq!(directories.data, dirs.default_tool_data_dir());
        assert_eq!(options.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_verbosity_only_feeds_logging() {
        let cli = Cli::parse_from(["arducli", "-vv", "--json", "version"]);
        assert_eq!(cli.verbose, 2);

        let output = OutputConfig::new(cli.quiet, cli.json);
        assert!(output.compact);
        assert!(!output.quiet);
    }
}
