//! Generic command execution
//!
//! Binds arduino-cli from the resolved options and runs one operation.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::cli::output::OutputConfig;
use crate::core::facade::{ArduinoCli, CliOptions};
use crate::core::invocation::OutputFormat;
use crate::core::operation::Operation;

enum Rendered {
    Json(Value),
    Text(String),
}

/// Run one operation and print its result
pub async fn execute(
    options: &CliOptions,
    operation: &Operation,
    output: &OutputConfig,
) -> Result<()> {
    let cli = ArduinoCli::setup(options).context("Failed to bind arduino-cli")?;
    tracing::info!(invocation = %cli.invocation(operation), "Invoking arduino-cli");

    let spinner = output.spinner(&format!("Running {}...", operation.subcommand()));

    let result = match operation.default_format() {
        OutputFormat::Json => cli.run(operation).await.map(Rendered::Json),
        format => cli
            .run_with(operation, format)
            .await
            .map(|out| Rendered::Text(out.stdout)),
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match result? {
        Rendered::Json(value) => output.print_value(&value),
        Rendered::Text(text) => print!("{text}"),
    }
    Ok(())
}
