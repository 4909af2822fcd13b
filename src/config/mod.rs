//! Configuration and constants
//!
//! - [`defaults`] - Built-in flag strings, file names and limits
//! - [`settings`] - Optional user settings file (`config.toml`)

pub mod defaults;
pub mod settings;
