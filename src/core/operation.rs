//! Typed operations and argument shaping
//!
//! Every facade method is one [`Operation`] variant. The variant knows its
//! [`Subcommand`] and how to turn its typed parameters into command-line
//! arguments, so a single dispatcher can run all of them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::command::Subcommand;
use super::invocation::OutputFormat;

/// Directory under which sketch names are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchRoot(PathBuf);

impl SketchRoot {
    /// Create a sketch root; the path is expected to be absolute
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The root directory
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolve a sketch name to its path under the root
    ///
    /// Absolute names are returned unchanged. An empty name resolves to the
    /// root itself.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

/// A platform reference `PACKAGER:ARCH[@VERSION]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRef {
    pub package: String,
    pub arch: String,
    pub version: Option<String>,
}

impl PlatformRef {
    /// Reference a platform, optionally pinned to a version
    pub fn new(package: &str, arch: &str, version: Option<&str>) -> Self {
        Self {
            package: package.to_string(),
            arch: arch.to_string(),
            version: non_empty(version).map(String::from),
        }
    }
}

impl fmt::Display for PlatformRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.arch)?;
        if let Some(version) = &self.version {
            write!(f, "@{version}")?;
        }
        Ok(())
    }
}

impl FromStr for PlatformRef {
    type Err = String;

    /// Parse `PACKAGER:ARCH[@VERSION]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, version) = match s.split_once('@') {
            Some((id, version)) => (id, Some(version)),
            None => (s, None),
        };
        match id.split_once(':') {
            Some((package, arch)) if !package.is_empty() && !arch.is_empty() => {
                Ok(Self::new(package, arch, version))
            }
            _ => Err(format!("expected PACKAGER:ARCH[@VERSION], got '{s}'")),
        }
    }
}

/// Append `@version` to a name when a version is given
pub fn versioned(name: &str, version: Option<&str>) -> String {
    match non_empty(version) {
        Some(v) => format!("{name}@{v}"),
        None => name.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `[flag, value]` when a non-empty value is given, nothing otherwise
fn flag_value(flag: &str, value: Option<&str>) -> Vec<String> {
    non_empty(value)
        .map(|v| vec![flag.to_string(), v.to_string()])
        .unwrap_or_default()
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// One arduino-cli operation with its typed parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Version,
    /// `config dump` against the tool's own defaults (no bound config file)
    Dump,
    BoardAttach {
        /// Port address or FQBN
        target: String,
        sketch: Option<String>,
    },
    BoardDetails {
        fqbn: String,
    },
    BoardList,
    BoardListall {
        board_name: Option<String>,
    },
    BurnBootloader {
        fqbn: Option<String>,
        port: Option<String>,
    },
    CacheClean,
    Compile {
        fqbn: String,
        /// Only needed when compiling also uploads
        port: Option<String>,
        sketch: String,
    },
    Completion {
        shell: String,
    },
    ConfigDump,
    ConfigInit,
    CoreDownload(PlatformRef),
    CoreInstall(PlatformRef),
    CoreList,
    CoreSearch {
        query: String,
    },
    CoreUninstall(PlatformRef),
    CoreUpdateIndex,
    CoreUpgrade(PlatformRef),
    Daemon,
    Debug {
        fqbn: String,
        sketch: String,
    },
    LibDeps {
        library: String,
        version: Option<String>,
    },
    LibDownload {
        libraries: Vec<String>,
    },
    LibInstall {
        libraries: Vec<String>,
    },
    LibList,
    LibSearch {
        query: String,
    },
    LibUninstall {
        libraries: Vec<String>,
    },
    LibUpdateIndex,
    LibUpgrade {
        libraries: Vec<String>,
    },
    Outdated,
    SketchNew {
        name: String,
    },
    Update,
    Upgrade,
    Upload {
        sketch: String,
        fqbn: String,
        port: String,
    },
}

impl Operation {
    /// The arduino-cli subcommand this operation runs
    pub fn subcommand(&self) -> Subcommand {
        match self {
            Operation::Version => Subcommand::Version,
            Operation::Dump | Operation::ConfigDump => Subcommand::ConfigDump,
            Operation::BoardAttach { .. } => Subcommand::BoardAttach,
            Operation::BoardDetails { .. } => Subcommand::BoardDetails,
            Operation::BoardList => Subcommand::BoardList,
            Operation::BoardListall { .. } => Subcommand::BoardListall,
            Operation::BurnBootloader { .. } => Subcommand::BurnBootloader,
            Operation::CacheClean => Subcommand::CacheClean,
            Operation::Compile { .. } => Subcommand::Compile,
            Operation::Completion { .. } => Subcommand::Completion,
            Operation::ConfigInit => Subcommand::ConfigInit,
            Operation::CoreDownload(_) => Subcommand::CoreDownload,
            Operation::CoreInstall(_) => Subcommand::CoreInstall,
            Operation::CoreList => Subcommand::CoreList,
            Operation::CoreSearch { .. } => Subcommand::CoreSearch,
            Operation::CoreUninstall(_) => Subcommand::CoreUninstall,
            Operation::CoreUpdateIndex => Subcommand::CoreUpdateIndex,
            Operation::CoreUpgrade(_) => Subcommand::CoreUpgrade,
            Operation::Daemon => Subcommand::Daemon,
            Operation::Debug { .. } => Subcommand::Debug,
            Operation::LibDeps { .. } => Subcommand::LibDeps,
            Operation::LibDownload { .. } => Subcommand::LibDownload,
            Operation::LibInstall { .. } => Subcommand::LibInstall,
            Operation::LibList => Subcommand::LibList,
            Operation::LibSearch { .. } => Subcommand::LibSearch,
            Operation::LibUninstall { .. } => Subcommand::LibUninstall,
            Operation::LibUpdateIndex => Subcommand::LibUpdateIndex,
            Operation::LibUpgrade { .. } => Subcommand::LibUpgrade,
            Operation::Outdated => Subcommand::Outdated,
            Operation::SketchNew { .. } => Subcommand::SketchNew,
            Operation::Update => Subcommand::Update,
            Operation::Upgrade => Subcommand::Upgrade,
            Operation::Upload { .. } => Subcommand::Upload,
        }
    }

    /// Whether the bound `--config-file` flag is passed
    pub fn uses_config_file(&self) -> bool {
        !matches!(self, Operation::Dump)
    }

    /// Output format requested when the caller does not override it
    pub fn default_format(&self) -> OutputFormat {
        match self {
            Operation::Completion { .. } => OutputFormat::Text,
            _ => OutputFormat::Json,
        }
    }

    /// Shape the operation's parameters into command-line arguments
    pub fn arguments(&self, sketches: &SketchRoot) -> Vec<String> {
        match self {
            Operation::BoardAttach { target, sketch } => {
                let mut args = vec![target.clone()];
                if let Some(sketch) = non_empty(sketch.as_deref()) {
                    args.push(display(&sketches.resolve(sketch)));
                }
                args
            }
            Operation::BoardDetails { fqbn } => flag_value("-b", Some(fqbn.as_str())),
            Operation::BoardListall { board_name } => non_empty(board_name.as_deref())
                .map(|name| vec![name.to_string()])
                .unwrap_or_default(),
            Operation::BurnBootloader { fqbn, port } => {
                let mut args = flag_value("-b", fqbn.as_deref());
                args.extend(flag_value("-P", port.as_deref()));
                args
            }
            Operation::Compile { fqbn, port, sketch } => {
                let mut args = flag_value("-b", Some(fqbn.as_str()));
                args.extend(flag_value("-p", port.as_deref()));
                args.push(display(&sketches.resolve(sketch)));
                args
            }
            Operation::Completion { shell } => vec![shell.clone()],
            Operation::CoreDownload(platform)
            | Operation::CoreInstall(platform)
            | Operation::CoreUninstall(platform)
            | Operation::CoreUpgrade(platform) => vec![platform.to_string()],
            Operation::CoreSearch { query } => vec![query.clone(), "-v".to_string()],
            Operation::Debug { fqbn, sketch } => {
                let mut args = flag_value("-b", Some(fqbn.as_str()));
                args.push(display(&sketches.resolve(sketch)));
                args
            }
            Operation::LibDeps { library, version } => {
                vec![versioned(library, version.as_deref())]
            }
            Operation::LibDownload { libraries }
            | Operation::LibInstall { libraries }
            | Operation::LibUninstall { libraries }
            | Operation::LibUpgrade { libraries } => libraries.clone(),
            Operation::LibSearch { query } => vec![query.clone()],
            Operation::SketchNew { name } => vec![display(&sketches.resolve(name))],
            Operation::Upload { sketch, fqbn, port } => {
                let mut args = vec![display(&sketches.resolve(sketch))];
                args.extend(flag_value("-b", Some(fqbn.as_str())));
                args.extend(flag_value("-p", Some(port.as_str())));
                args
            }
            Operation::Version
            | Operation::Dump
            | Operation::BoardList
            | Operation::CacheClean
            | Operation::ConfigDump
            | Operation::ConfigInit
            | Operation::CoreList
            | Operation::CoreUpdateIndex
            | Operation::Daemon
            | Operation::LibList
            | Operation::LibUpdateIndex
            | Operation::Outdated
            | Operation::Update
            | Operation::Upgrade => Vec::new(),
        }
    }
}
