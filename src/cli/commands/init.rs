//! Init command implementation
//!
//! Creates the user/data directories, writes `arduino-cli.yaml` if missing
//! and checks that arduino-cli answers `core list`.

use anyhow::Result;

use crate::cli::output::{status, OutputConfig};
use crate::core::facade::{ArduinoCli, CliOptions};

/// Execute the init command
pub async fn execute(options: CliOptions, output: &OutputConfig) -> Result<()> {
    let spinner = output.spinner("Checking arduino-cli...");
    let result = ArduinoCli::init(options).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let (cli, cores) = result?;

    if !output.quiet {
        let binding = cli.binding();
        eprintln!("{} arduino-cli bound", status::SUCCESS);
        eprintln!("  Binary: {}", binding.binary.display());
        eprintln!("  Config: {}", binding.config_file.display());
        eprintln!("  User:   {}", binding.directories.user.display());
        eprintln!("  Data:   {}", binding.directories.data.display());
    }

    output.print_value(&cores);
    Ok(())
}
