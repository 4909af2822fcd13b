//! Command-line assembly
//!
//! Joins the executable path, global flags, subcommand tokens and shaped
//! arguments into one invocation, always ending with exactly one output
//! format flag.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::defaults::{DEFAULT_FORMAT_FLAG, TEXT_FORMAT_FLAG};

/// Output serialization requested from arduino-cli
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `--format json`
    #[default]
    Json,
    /// `--format text`
    Text,
    /// Caller-supplied flag, used verbatim
    Custom(String),
}

impl OutputFormat {
    /// The flag string appended to the command line
    ///
    /// A blank custom flag falls back to `--format json`.
    pub fn flag(&self) -> &str {
        match self {
            OutputFormat::Json => DEFAULT_FORMAT_FLAG,
            OutputFormat::Text => TEXT_FORMAT_FLAG,
            OutputFormat::Custom(flag) if flag.trim().is_empty() => DEFAULT_FORMAT_FLAG,
            OutputFormat::Custom(flag) => flag.trim(),
        }
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        self.flag().split_whitespace()
    }
}

/// Join segments into a single command line with a trailing format flag
///
/// `format` replaces the default `--format json` when given and not blank;
/// it is never duplicated. Segments are joined as-is.
pub fn build_command_line<S: AsRef<str>>(segments: &[S], format: Option<&str>) -> String {
    let flag = format
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FORMAT_FLAG);
    let mut parts: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    parts.push(flag);
    parts.join(" ")
}

/// A fully assembled arduino-cli invocation
///
/// Token order is fixed: program, global flags, subcommand, arguments,
/// format flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    global_args: Vec<String>,
    subcommand: Vec<String>,
    args: Vec<String>,
    format: OutputFormat,
}

impl Invocation {
    /// Start an invocation of the given executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            global_args: Vec::new(),
            subcommand: Vec::new(),
            args: Vec::new(),
            format: OutputFormat::default(),
        }
    }

    /// Add global flags placed before the subcommand
    pub fn with_global_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the subcommand path, e.g. `["core", "install"]`
    pub fn with_subcommand(mut self, tokens: &[&str]) -> Self {
        self.subcommand = tokens.iter().map(|t| (*t).to_string()).collect();
        self
    }

    /// Add operation arguments
    ///
    /// Empty tokens are dropped.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(
            args.into_iter()
                .map(Into::into)
                .filter(|arg: &String| !arg.is_empty()),
        );
        self
    }

    /// Override the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Path of the executable
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Requested output format
    pub fn format(&self) -> &OutputFormat {
        &self.format
    }

    /// Operation arguments after shaping
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments passed to the executable, in order, excluding the program
    pub fn argv(&self) -> Vec<String> {
        self.global_args
            .iter()
            .chain(&self.subcommand)
            .chain(&self.args)
            .cloned()
            .chain(self.format.tokens().map(String::from))
            .collect()
    }

    /// The invocation rendered as one space-joined command line
    pub fn command_line(&self) -> String {
        let mut segments = vec![self.program.to_string_lossy().into_owned()];
        segments.extend(
            self.global_args
                .iter()
                .chain(&self.subcommand)
                .chain(&self.args)
                .cloned(),
        );
        build_command_line(&segments, Some(self.format.flag()))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_format_is_appended() {
        let line = build_command_line(&["arduino-cli", "core", "list"], None);
        assert_eq!(line, "arduino-cli core list --format json");
    }

    #[test]
    fn test_explicit_format_replaces_default() {
        let line = build_command_line(&["arduino-cli", "version"], Some("--format text"));
        assert_eq!(line, "arduino-cli version --format text");
    }

    #[test]
    fn test_invocation_token_order() {
        let inv = Invocation::new("/opt/arduino/arduino-cli")
            .with_global_args(["--config-file", "/opt/arduino/arduino-cli.yaml"])
            .with_subcommand(&["core", "install"])
            .with_args(["arduino:avr@1.8.3"]);

        assert_eq!(
            inv.command_line(),
            "/opt/arduino/arduino-cli --config-file /opt/arduino/arduino-cli.yaml \
             core install arduino:avr@1.8.3 --format json"
        );
        assert_eq!(
            inv.argv(),
            vec![
                "--config-file",
                "/opt/arduino/arduino-cli.yaml",
                "core",
                "install",
                "arduino:avr@1.8.3",
                "--format",
                "json"
            ]
        );
    }

    #[test]
    fn test_empty_args_are_dropped() {
        let inv = Invocation::new("arduino-cli")
            .with_subcommand(&["burn-bootloader"])
            .with_args(["", "-P", "/dev/ttyACM0", ""]);
        assert_eq!(inv.args(), ["-P", "/dev/ttyACM0"]);
        assert!(!inv.command_line().contains("  "));
    }

    #[test]
    fn test_custom_format_is_verbatim() {
        let inv = Invocation::new("arduino-cli")
            .with_subcommand(&["version"])
            .with_format(OutputFormat::Custom("--format jsonmini".to_string()));
        assert_eq!(inv.command_line(), "arduino-cli version --format jsonmini");
        assert_eq!(inv.argv(), vec!["version", "--format", "jsonmini"]);
    }

    #[test]
    fn test_blank_custom_format_falls_back_to_json() {
        for blank in ["", "   "] {
            let inv = Invocation::new("arduino-cli")
                .with_subcommand(&["version"])
                .with_format(OutputFormat::Custom(blank.to_string()));
            assert_eq!(inv.command_line(), "arduino-cli version --format json");
            assert_eq!(inv.argv(), vec!["version", "--format", "json"]);
        }
        assert_eq!(
            build_command_line(&["arduino-cli", "version"], Some("")),
            "arduino-cli version --format json"
        );
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9:@/._]{1,16}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_line_starts_with_program_and_ends_with_one_flag(
            program in segment(),
            args in proptest::collection::vec(segment(), 0..8),
        ) {
            let mut segments = vec![program.clone()];
            segments.extend(args);
            let line = build_command_line(&segments, None);

            prop_assert!(line.starts_with(&program));
            prop_assert!(line.ends_with(DEFAULT_FORMAT_FLAG));
            prop_assert_eq!(line.matches("--format").count(), 1);
        }

        #[test]
        fn prop_override_is_used_once(
            args in proptest::collection::vec(segment(), 1..6),
            fmt in prop_oneof![Just("--format text"), Just("--format jsonmini")],
        ) {
            let line = build_command_line(&args, Some(fmt));
            prop_assert!(line.ends_with(fmt));
            prop_assert_eq!(line.matches("--format").count(), 1);
        }
    }
}
