//! Arducli - typed async binding for arduino-cli
//!
//! This library drives an installed `arduino-cli` executable: it builds the
//! command line for each subcommand, runs it as a subprocess and returns the
//! tool's JSON output as [`serde_json::Value`].
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Command building, operation table and the facade
//! - [`infra`] - Infrastructure layer (filesystem, processes, directories)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use arducli::{ArduinoCli, CliOptions, Directories};
//!
//! # async fn example() -> arducli::error::Result<()> {
//! let (cli, _cores) = ArduinoCli::init(
//!     CliOptions::new()
//!         .with_binary_dir("/opt/arduino")
//!         .with_directories(Directories::new("/opt/arduino/sketches", "/opt/arduino/data")),
//! )
//! .await?;
//!
//! cli.core_install("arduino", "avr", Some("1.8.3")).await?;
//! let result = cli.compile("arduino:avr:uno", Some("/dev/ttyACM0"), "Blink").await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

pub use crate::core::facade::{ArduinoCli, Binding, CliOptions};
pub use crate::core::invocation::{Invocation, OutputFormat};
pub use crate::core::operation::Operation;
pub use crate::core::tool_config::Directories;
pub use crate::error::CliError;
