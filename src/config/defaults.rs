//! Default configuration values

/// Trailing flag requesting structured output from arduino-cli
pub const DEFAULT_FORMAT_FLAG: &str = "--format json";

/// Trailing flag requesting human-readable output
pub const TEXT_FORMAT_FLAG: &str = "--format text";

/// Global flag naming the arduino-cli config file
pub const CONFIG_FILE_FLAG: &str = "--config-file";

/// Name of the arduino-cli config file written during init
pub const TOOL_CONFIG_FILE: &str = "arduino-cli.yaml";

/// Executable name on Linux and macOS
pub const UNIX_EXECUTABLE: &str = "arduino-cli";

/// Executable name on Windows
pub const WINDOWS_EXECUTABLE: &str = "arduino-cli.exe";

/// Name of the arducli settings file
pub const SETTINGS_FILE: &str = "config.toml";

/// Validation message when no binary directory was given
pub const MISSING_BINARY_DIR: &str = "Provide the path of the arduino-cli binary directory";

/// Validation message when the user/data directory pair was not given
pub const MISSING_DIRECTORIES: &str =
    "Provide the paths of the arduino-cli user and data directories";
