//! The arduino-cli facade
//!
//! [`ArduinoCli`] binds one arduino-cli executable to one config file and one
//! pair of user/data directories, and exposes one async method per
//! arduino-cli subcommand. Every method goes through the same path:
//! [`Operation`] → [`Invocation`] → [`ProcessRunner`] → JSON.
//!
//! A value of this type only exists after a successful [`ArduinoCli::setup`]
//! (or [`ArduinoCli::init`]), so there is no uninitialized state to guard
//! against. It is cheap to clone and safe to share between tasks.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::invocation::{Invocation, OutputFormat};
use super::operation::{Operation, PlatformRef, SketchRoot};
use super::platform::Platform;
use super::tool_config::{Directories, ToolConfig};
use super::version::ToolVersion;
use crate::config::defaults::{
    CONFIG_FILE_FLAG, MISSING_BINARY_DIR, MISSING_DIRECTORIES, TOOL_CONFIG_FILE,
};
use crate::error::{CliError, Result};
use crate::infra::filesystem;
use crate::infra::process::{ProcessRunner, ToolOutput};

/// Inputs for binding an [`ArduinoCli`]
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Directory holding the arduino-cli executable; searched on `PATH` when unset
    pub binary_dir: Option<PathBuf>,
    /// arduino-cli user/data directories
    pub directories: Option<Directories>,
    /// Where `arduino-cli.yaml` lives; defaults to `binary_dir`
    pub config_dir: Option<PathBuf>,
    /// Per-invocation timeout
    pub timeout: Option<Duration>,
    /// Platform override; detected from the host when unset
    pub platform: Option<Platform>,
}

impl CliOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binary_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary_dir = Some(path.into());
        self
    }

    pub fn with_directories(mut self, directories: Directories) -> Self {
        self.directories = Some(directories);
        self
    }

    pub fn with_config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(path.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

/// Resolved state shared by every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Full path of the arduino-cli executable
    pub binary: PathBuf,
    /// Config file passed through `--config-file`
    pub config_file: PathBuf,
    /// Bound user/data directories (absolute)
    pub directories: Directories,
}

/// Async binding to one arduino-cli installation
#[derive(Debug, Clone)]
pub struct ArduinoCli {
    binding: Binding,
    sketches: SketchRoot,
    runner: ProcessRunner,
}

impl ArduinoCli {
    /// Validate options, prepare directories and the config file, and resolve
    /// the executable. Runs no subprocess.
    ///
    /// Validation happens before anything touches the filesystem.
    pub fn setup(options: &CliOptions) -> Result<Self> {
        let platform = match options.platform {
            Some(platform) => platform,
            None => Platform::current()?,
        };

        let binary_dir = match options.binary_dir.as_deref() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => locate_binary_dir(platform)?,
        };

        let requested = options
            .directories
            .as_ref()
            .filter(|d| !d.user.as_os_str().is_empty() && !d.data.as_os_str().is_empty())
            .ok_or_else(|| CliError::validation(MISSING_DIRECTORIES))?;

        let directories = Directories::new(absolute(&requested.user)?, absolute(&requested.data)?);
        filesystem::create_dir_all(&directories.user)?;
        filesystem::create_dir_all(&directories.data)?;

        let config_dir = options.config_dir.as_deref().unwrap_or(&binary_dir);
        let config_file = absolute(&config_dir.join(TOOL_CONFIG_FILE))?;
        let tool_config = ToolConfig::new(directories.clone());

        if tool_config.write_if_absent(&config_file)? {
            tracing::info!(path = %config_file.display(), "Wrote arduino-cli config file");
        } else {
            tracing::debug!(path = %config_file.display(), "Keeping existing arduino-cli config file");
            warn_on_divergence(&config_file, &tool_config);
        }

        let binary = absolute(&binary_dir.join(platform.executable_name()))?;

        Ok(Self {
            sketches: SketchRoot::new(directories.user.clone()),
            binding: Binding {
                binary,
                config_file,
                directories,
            },
            runner: ProcessRunner::new().with_timeout(options.timeout),
        })
    }

    /// [`setup`](Self::setup) followed by a `core list` call that proves the
    /// executable is reachable. Returns the bound facade and that response.
    pub async fn init(options: CliOptions) -> Result<(Self, Value)> {
        let cli = Self::setup(&options)?;
        let cores = cli.core_list().await?;
        tracing::info!(binary = %cli.binding.binary.display(), "arduino-cli ready");
        Ok((cli, cores))
    }

    /// The resolved binary, config file and directories
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Absolute path of a sketch under the bound user directory
    pub fn sketch_path(&self, name: &str) -> PathBuf {
        self.sketches.resolve(name)
    }

    /// Build the invocation for an operation with its default format
    pub fn invocation(&self, operation: &Operation) -> Invocation {
        self.invocation_with(operation, operation.default_format())
    }

    /// Build the invocation for an operation with an explicit format
    pub fn invocation_with(&self, operation: &Operation, format: OutputFormat) -> Invocation {
        let mut invocation = Invocation::new(&self.binding.binary);
        if operation.uses_config_file() {
            invocation = invocation.with_global_args([
                CONFIG_FILE_FLAG.to_string(),
                self.binding.config_file.to_string_lossy().into_owned(),
            ]);
        }
        invocation
            .with_subcommand(operation.subcommand().tokens())
            .with_args(operation.arguments(&self.sketches))
            .with_format(format)
    }

    /// Run an operation and parse its standard output as JSON
    pub async fn run(&self, operation: &Operation) -> Result<Value> {
        let invocation = self.invocation(operation);
        let output = self.runner.run(&invocation).await?;
        parse_json(&invocation, &output.stdout)
    }

    /// Run an operation with an explicit format and return the raw output
    pub async fn run_with(&self, operation: &Operation, format: OutputFormat) -> Result<ToolOutput> {
        let invocation = self.invocation_with(operation, format);
        self.runner.run(&invocation).await
    }

    /// Run an operation that can be aborted through `token`
    pub async fn run_cancellable(
        &self,
        operation: &Operation,
        token: &CancellationToken,
    ) -> Result<Value> {
        let invocation = self.invocation(operation);
        let output = self.runner.run_cancellable(&invocation, token).await?;
        parse_json(&invocation, &output.stdout)
    }

    /// Shows version number of arduino-cli
    pub async fn version(&self) -> Result<Value> {
        self.run(&Operation::Version).await
    }

    /// Version of the bound executable as semver
    pub async fn version_info(&self) -> Result<ToolVersion> {
        ToolVersion::from_json(&self.version().await?)
    }

    /// Dumps the tool's default configuration, ignoring the bound config file
    pub async fn dump(&self) -> Result<Value> {
        self.run(&Operation::Dump).await
    }

    /// Attaches a sketch to a board; `target` is a port address or an FQBN
    pub async fn board_attach(&self, target: &str, sketch: Option<&str>) -> Result<Value> {
        self.run(&Operation::BoardAttach {
            target: target.to_string(),
            sketch: sketch.map(String::from),
        })
        .await
    }

    /// Prints details about a board
    pub async fn board_details(&self, fqbn: &str) -> Result<Value> {
        self.run(&Operation::BoardDetails {
            fqbn: fqbn.to_string(),
        })
        .await
    }

    /// Lists connected boards
    pub async fn board_list(&self) -> Result<Value> {
        self.run(&Operation::BoardList).await
    }

    /// Lists known boards and their FQBN, optionally filtered by name
    pub async fn board_listall(&self, board_name: Option<&str>) -> Result<Value> {
        self.run(&Operation::BoardListall {
            board_name: board_name.map(String::from),
        })
        .await
    }

    /// Uploads the bootloader using an external programmer
    pub async fn burn_bootloader(&self, fqbn: Option<&str>, port: Option<&str>) -> Result<Value> {
        self.run(&Operation::BurnBootloader {
            fqbn: fqbn.map(String::from),
            port: port.map(String::from),
        })
        .await
    }

    pub async fn cache_clean(&self) -> Result<Value> {
        self.run(&Operation::CacheClean).await
    }

    /// Compiles a sketch from the bound user directory
    ///
    /// `port` is passed only when given; arduino-cli needs it when uploading
    /// after the build.
    pub async fn compile(&self, fqbn: &str, port: Option<&str>, sketch: &str) -> Result<Value> {
        self.run(&Operation::Compile {
            fqbn: fqbn.to_string(),
            port: port.map(String::from),
            sketch: sketch.to_string(),
        })
        .await
    }

    /// Generates a completion script for `shell`
    ///
    /// The script is plain text, so it is returned as-is instead of parsed.
    pub async fn completion(&self, shell: &str) -> Result<String> {
        let operation = Operation::Completion {
            shell: shell.to_string(),
        };
        let output = self.run_with(&operation, operation.default_format()).await?;
        Ok(output.stdout)
    }

    /// Prints the configuration in effect through the bound config file
    pub async fn config_dump(&self) -> Result<Value> {
        self.run(&Operation::ConfigDump).await
    }

    pub async fn config_init(&self) -> Result<Value> {
        self.run(&Operation::ConfigInit).await
    }

    /// Downloads a core and its tool dependencies
    pub async fn core_download(
        &self,
        package: &str,
        arch: &str,
        version: Option<&str>,
    ) -> Result<Value> {
        self.run(&Operation::CoreDownload(PlatformRef::new(package, arch, version)))
            .await
    }

    /// Installs a core and its tool dependencies
    pub async fn core_install(
        &self,
        package: &str,
        arch: &str,
        version: Option<&str>,
    ) -> Result<Value> {
        self.run(&Operation::CoreInstall(PlatformRef::new(package, arch, version)))
            .await
    }

    /// Shows the installed platforms
    pub async fn core_list(&self) -> Result<Value> {
        self.run(&Operation::CoreList).await
    }

    pub async fn core_search(&self, query: &str) -> Result<Value> {
        self.run(&Operation::CoreSearch {
            query: query.to_string(),
        })
        .await
    }

    pub async fn core_uninstall(&self, package: &str, arch: &str) -> Result<Value> {
        self.run(&Operation::CoreUninstall(PlatformRef::new(package, arch, None)))
            .await
    }

    pub async fn core_update_index(&self) -> Result<Value> {
        self.run(&Operation::CoreUpdateIndex).await
    }

    pub async fn core_upgrade(&self, package: &str, arch: &str) -> Result<Value> {
        self.run(&Operation::CoreUpgrade(PlatformRef::new(package, arch, None)))
            .await
    }

    /// Runs arduino-cli as a gRPC daemon
    ///
    /// The daemon does not exit on its own; pair with a timeout or
    /// [`run_cancellable`](Self::run_cancellable).
    pub async fn daemon(&self) -> Result<Value> {
        self.run(&Operation::Daemon).await
    }

    pub async fn debug(&self, fqbn: &str, sketch: &str) -> Result<Value> {
        self.run(&Operation::Debug {
            fqbn: fqbn.to_string(),
            sketch: sketch.to_string(),
        })
        .await
    }

    /// Checks dependency status of a library, optionally at a version
    pub async fn lib_deps(&self, library: &str, version: Option<&str>) -> Result<Value> {
        self.run(&Operation::LibDeps {
            library: library.to_string(),
            version: version.map(String::from),
        })
        .await
    }

    /// Downloads libraries without installing them, e.g. `AudioZero@1.0.0`
    pub async fn lib_download(&self, libraries: &[&str]) -> Result<Value> {
        self.run(&Operation::LibDownload {
            libraries: owned(libraries),
        })
        .await
    }

    pub async fn lib_install(&self, libraries: &[&str]) -> Result<Value> {
        self.run(&Operation::LibInstall {
            libraries: owned(libraries),
        })
        .await
    }

    pub async fn lib_list(&self) -> Result<Value> {
        self.run(&Operation::LibList).await
    }

    pub async fn lib_search(&self, query: &str) -> Result<Value> {
        self.run(&Operation::LibSearch {
            query: query.to_string(),
        })
        .await
    }

    pub async fn lib_uninstall(&self, libraries: &[&str]) -> Result<Value> {
        self.run(&Operation::LibUninstall {
            libraries: owned(libraries),
        })
        .await
    }

    pub async fn lib_update_index(&self) -> Result<Value> {
        self.run(&Operation::LibUpdateIndex).await
    }

    /// Upgrades the named libraries, or all of them when `libraries` is empty
    pub async fn lib_upgrade(&self, libraries: &[&str]) -> Result<Value> {
        self.run(&Operation::LibUpgrade {
            libraries: owned(libraries),
        })
        .await
    }

    /// Lists cores and libraries that can be upgraded
    pub async fn outdated(&self) -> Result<Value> {
        self.run(&Operation::Outdated).await
    }

    /// Creates a sketch in the bound user directory
    pub async fn sketch_new(&self, name: &str) -> Result<Value> {
        self.run(&Operation::SketchNew {
            name: name.to_string(),
        })
        .await
    }

    /// Updates the core and library indexes
    pub async fn update(&self) -> Result<Value> {
        self.run(&Operation::Update).await
    }

    /// Upgrades installed cores and libraries
    pub async fn upgrade(&self) -> Result<Value> {
        self.run(&Operation::Upgrade).await
    }

    /// Uploads a sketch from the bound user directory
    pub async fn upload(&self, sketch: &str, fqbn: &str, port: &str) -> Result<Value> {
        self.run(&Operation::Upload {
            sketch: sketch.to_string(),
            fqbn: fqbn.to_string(),
            port: port.to_string(),
        })
        .await
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Parse standard output, keeping "no output" distinct from "bad output"
fn parse_json(invocation: &Invocation, stdout: &str) -> Result<Value> {
    if stdout.trim().is_empty() {
        return Err(CliError::EmptyOutput {
            invocation: invocation.command_line(),
        });
    }

    serde_json::from_str(stdout).map_err(|e| CliError::Parse {
        invocation: invocation.command_line(),
        error: e.to_string(),
        stdout: stdout.to_string(),
    })
}

fn locate_binary_dir(platform: Platform) -> Result<PathBuf> {
    which::which(platform.executable_name())
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .ok_or_else(|| CliError::validation(MISSING_BINARY_DIR))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| CliError::Validation {
        message: format!("Cannot resolve '{}': {e}", path.display()),
    })?;
    Ok(cwd.join(path))
}

/// The file is never rewritten; report when it no longer matches the binding
fn warn_on_divergence(path: &Path, requested: &ToolConfig) {
    match ToolConfig::load(path) {
        Ok(existing) if existing != *requested => {
            tracing::warn!(
                path = %path.display(),
                persisted_user = %existing.directories.user.display(),
                requested_user = %requested.directories.user.display(),
                "Existing arduino-cli config records different directories; it is not updated"
            );
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "Could not read existing arduino-cli config"),
    }
}
