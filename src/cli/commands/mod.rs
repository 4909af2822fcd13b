//! CLI command implementations
//!
//! Subcommands mirror arduino-cli's own. Each one converts to an
//! [`Operation`] and is run by [`invoke::execute`]; `init` has its own
//! module because it also prepares the directories and config file.

pub mod init;
pub mod invoke;

use anyhow::Result;
use clap::Subcommand;

use super::output::OutputConfig;
use crate::core::facade::CliOptions;
use crate::core::operation::{Operation, PlatformRef};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare directories and config file, then list installed cores
    Init,

    /// Show the arduino-cli version
    Version,

    /// Dump arduino-cli's default configuration
    Dump,

    /// Board subcommands
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },

    /// Upload the bootloader using an external programmer
    BurnBootloader {
        /// Fully Qualified Board Name, e.g.: arduino:avr:uno
        #[arg(short = 'b', long)]
        fqbn: Option<String>,

        /// Upload port, e.g.: COM10 or /dev/ttyACM0
        #[arg(short = 'P', long)]
        port: Option<String>,
    },

    /// Cache subcommands
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },

    /// Compile a sketch
    Compile {
        /// Fully Qualified Board Name
        #[arg(short = 'b', long)]
        fqbn: String,

        /// Upload port
        #[arg(short = 'p', long)]
        port: Option<String>,

        /// Sketch name, resolved under the user directory
        sketch: String,
    },

    /// Generate a shell completion script
    Completion {
        /// Shell name: bash, zsh, fish or powershell
        shell: String,
    },

    /// Config subcommands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Core subcommands
    Core {
        #[command(subcommand)]
        command: CoreCommands,
    },

    /// Run arduino-cli as a daemon
    Daemon,

    /// Debug a sketch
    Debug {
        /// Fully Qualified Board Name
        #[arg(short = 'b', long)]
        fqbn: String,

        /// Sketch name
        sketch: String,
    },

    /// Library subcommands
    Lib {
        #[command(subcommand)]
        command: LibCommands,
    },

    /// List cores and libraries that can be upgraded
    Outdated,

    /// Sketch subcommands
    Sketch {
        #[command(subcommand)]
        command: SketchCommands,
    },

    /// Update the core and library indexes
    Update,

    /// Upgrade installed cores and libraries
    Upgrade,

    /// Upload a sketch
    Upload {
        /// Sketch name
        sketch: String,

        /// Fully Qualified Board Name
        #[arg(short = 'b', long)]
        fqbn: String,

        /// Upload port
        #[arg(short = 'p', long)]
        port: String,
    },
}

/// Board subcommands
#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// Attach a sketch to a board
    Attach {
        /// Port address or FQBN
        target: String,

        /// Sketch name
        sketch: Option<String>,
    },

    /// Show board details
    Details {
        /// Fully Qualified Board Name
        #[arg(short = 'b', long)]
        fqbn: String,
    },

    /// List connected boards
    List,

    /// List all known boards
    Listall {
        /// Filter by board name
        name: Option<String>,
    },
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Clean the arduino-cli cache
    Clean,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the configuration in effect
    Dump,

    /// Write the current configuration to a file
    Init,
}

/// Core subcommands
#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Download a core without installing it
    Download {
        /// PACKAGER:ARCH[@VERSION]
        platform: PlatformRef,
    },

    /// Install a core
    Install {
        /// PACKAGER:ARCH[@VERSION]
        platform: PlatformRef,
    },

    /// List installed cores
    List,

    /// Search the package index
    Search {
        /// Keywords
        query: String,
    },

    /// Uninstall a core
    Uninstall {
        /// PACKAGER:ARCH
        platform: PlatformRef,
    },

    /// Update the core index
    UpdateIndex,

    /// Upgrade a core to the latest version
    Upgrade {
        /// PACKAGER:ARCH
        platform: PlatformRef,
    },
}

/// Library subcommands
#[derive(Subcommand, Debug)]
pub enum LibCommands {
    /// Check dependency status of a library
    Deps {
        /// LIBRARY[@VERSION], e.g. AudioZero@1.0.0
        library: String,
    },

    /// Download libraries without installing them
    Download {
        /// Library specs, e.g. AudioZero@1.0.0
        #[arg(required = true)]
        libraries: Vec<String>,
    },

    /// Install libraries
    Install {
        /// Library specs
        #[arg(required = true)]
        libraries: Vec<String>,
    },

    /// List installed libraries
    List,

    /// Search the library index
    Search {
        /// Library name
        query: String,
    },

    /// Uninstall libraries
    Uninstall {
        /// Library names
        #[arg(required = true)]
        libraries: Vec<String>,
    },

    /// Update the library index
    UpdateIndex,

    /// Upgrade libraries (all when none are named)
    Upgrade {
        /// Library names
        libraries: Vec<String>,
    },
}

/// Sketch subcommands
#[derive(Subcommand, Debug)]
pub enum SketchCommands {
    /// Create a new sketch
    New {
        /// Sketch name
        name: String,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, options: CliOptions, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Init => init::execute(options, output).await,
            other => invoke::execute(&options, &other.into_operation(), output).await,
        }
    }

    /// The operation this command runs
    ///
    /// `init` is not an arduino-cli subcommand; it maps to `core list`, the
    /// call it ends with.
    pub fn into_operation(self) -> Operation {
        match self {
            Self::Init => Operation::CoreList,
            Self::Version => Operation::Version,
            Self::Dump => Operation::Dump,
            Self::Board { command } => match command {
                BoardCommands::Attach { target, sketch } => {
                    Operation::BoardAttach { target, sketch }
                }
                BoardCommands::Details { fqbn } => Operation::BoardDetails { fqbn },
                BoardCommands::List => Operation::BoardList,
                BoardCommands::Listall { name } => Operation::BoardListall { board_name: name },
            },
            Self::BurnBootloader { fqbn, port } => Operation::BurnBootloader { fqbn, port },
            Self::Cache {
                command: CacheCommands::Clean,
            } => Operation::CacheClean,
            Self::Compile { fqbn, port, sketch } => Operation::Compile { fqbn, port, sketch },
            Self::Completion { shell } => Operation::Completion { shell },
            Self::Config { command } => match command {
                ConfigCommands::Dump => Operation::ConfigDump,
                ConfigCommands::Init => Operation::ConfigInit,
            },
            Self::Core { command } => match command {
                CoreCommands::Download { platform } => Operation::CoreDownload(platform),
                CoreCommands::Install { platform } => Operation::CoreInstall(platform),
                CoreCommands::List => Operation::CoreList,
                CoreCommands::Search { query } => Operation::CoreSearch { query },
                CoreCommands::Uninstall { platform } => Operation::CoreUninstall(platform),
                CoreCommands::UpdateIndex => Operation::CoreUpdateIndex,
                CoreCommands::Upgrade { platform } => Operation::CoreUpgrade(platform),
            },
            Self::Daemon => Operation::Daemon,
            Self::Debug { fqbn, sketch } => Operation::Debug { fqbn, sketch },
            Self::Lib { command } => match command {
                LibCommands::Deps { library } => match library.split_once('@') {
                    Some((name, version)) => Operation::LibDeps {
                        library: name.to_string(),
                        version: Some(version.to_string()).filter(|v| !v.is_empty()),
                    },
                    None => Operation::LibDeps {
                        library,
                        version: None,
                    },
                },
                LibCommands::Download { libraries } => Operation::LibDownload { libraries },
                LibCommands::Install { libraries } => Operation::LibInstall { libraries },
                LibCommands::List => Operation::LibList,
                LibCommands::Search { query } => Operation::LibSearch { query },
                LibCommands::Uninstall { libraries } => Operation::LibUninstall { libraries },
                LibCommands::UpdateIndex => Operation::LibUpdateIndex,
                LibCommands::Upgrade { libraries } => Operation::LibUpgrade { libraries },
            },
            Self::Outdated => Operation::Outdated,
            Self::Sketch {
                command: SketchCommands::New { name },
            } => Operation::SketchNew { name },
            Self::Update => Operation::Update,
            Self::Upgrade => Operation::Upgrade,
            Self::Upload { sketch, fqbn, port } => Operation::Upload { sketch, fqbn, port },
        }
    }
}
