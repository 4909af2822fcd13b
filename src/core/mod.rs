//! Core logic module
//!
//! Everything needed to turn a typed request into an arduino-cli command
//! line and its output back into a value. Process and filesystem access
//! goes through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`invocation`] - Command-line assembly and output format flags
//! - [`command`] - arduino-cli subcommand table
//! - [`operation`] - Typed operations and argument shaping
//! - [`facade`] - The [`ArduinoCli`](facade::ArduinoCli) binding
//! - [`platform`] - Executable name per host platform
//! - [`tool_config`] - The `arduino-cli.yaml` document
//! - [`version`] - Tool version parsing

pub mod command;
pub mod facade;
pub mod invocation;
pub mod operation;
pub mod platform;
pub mod tool_config;
pub mod version;
