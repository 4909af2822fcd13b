//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying a spinner while arduino-cli
//! runs, rendering its JSON result, and reporting errors.

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::error::CliError;

/// Output preferences from global flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress everything except the result and errors
    pub quiet: bool,
    /// Print compact JSON
    pub compact: bool,
}

impl OutputConfig {
    pub fn new(quiet: bool, compact: bool) -> Self {
        Self { quiet, compact }
    }

    /// Spinner shown while waiting on arduino-cli, unless quiet
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        (!self.quiet).then(|| create_spinner(message))
    }

    /// Render a JSON value according to the preferences
    pub fn render(&self, value: &Value) -> String {
        let rendered = if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        };
        rendered.unwrap_or_else(|_| value.to_string())
    }

    /// Print a JSON value to stdout
    pub fn print_value(&self, value: &Value) {
        println!("{}", self.render(value));
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print an error chain to stderr, including captured arduino-cli stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);

    if let Some(CliError::Parse { stdout, .. }) = error.downcast_ref::<CliError>() {
        eprintln!("{} arduino-cli printed:", status::INFO);
        eprintln!("{}", stdout.trim_end());
    }

    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
