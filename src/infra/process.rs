//! Subprocess execution
//!
//! Runs an [`Invocation`] as a child process, capturing stdout and stderr.
//! The child is spawned directly from its argv (no shell) and is killed if
//! the call times out or is cancelled.

use std::future::Future;
use std::io;
use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::core::invocation::Invocation;
use crate::error::CliError;

/// Captured result of a successful child process
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit status
    pub status: ExitStatus,
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

/// Runs arduino-cli invocations
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    /// Maximum run time per invocation
    timeout: Option<Duration>,
}

impl ProcessRunner {
    /// Create a runner without a timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-invocation timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run an invocation to completion
    pub async fn run(&self, invocation: &Invocation) -> Result<ToolOutput, CliError> {
        self.execute(invocation, None).await
    }

    /// Run an invocation, aborting when `token` is cancelled
    pub async fn run_cancellable(
        &self,
        invocation: &Invocation,
        token: &CancellationToken,
    ) -> Result<ToolOutput, CliError> {
        self.execute(invocation, Some(token)).await
    }

    async fn execute(
        &self,
        invocation: &Invocation,
        cancel: Option<&CancellationToken>,
    ) -> Result<ToolOutput, CliError> {
        let command_line = invocation.command_line();
        tracing::debug!(invocation = %command_line, "Running arduino-cli");

        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.argv())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        tracing::warn!(invocation = %command_line, "Invocation cancelled");
                        return Err(CliError::Cancelled {
                            invocation: command_line,
                        });
                    }
                    result = self.bounded(&command_line, cmd.output()) => result?,
                }
            }
            None => self.bounded(&command_line, cmd.output()).await?,
        };

        let result = ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::trace!(
            status = %result.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "arduino-cli finished"
        );

        if !result.status.success() {
            let stderr = if result.stderr.trim().is_empty() {
                result.stdout.trim().to_string()
            } else {
                result.stderr.trim().to_string()
            };
            tracing::warn!(invocation = %command_line, status = %result.status, "arduino-cli failed");
            return Err(CliError::Execution {
                invocation: command_line,
                status: result.status.to_string(),
                stderr,
            });
        }

        Ok(result)
    }

    /// Await the child, applying the configured timeout
    async fn bounded<F>(&self, command_line: &str, child: F) -> Result<Output, CliError>
    where
        F: Future<Output = io::Result<Output>>,
    {
        let spawn_err = |e: io::Error| CliError::Spawn {
            invocation: command_line.to_string(),
            error: e.to_string(),
        };

        match self.timeout {
            Some(after) => match tokio::time::timeout(after, child).await {
                Ok(result) => result.map_err(spawn_err),
                Err(_) => {
                    tracing::warn!(invocation = %command_line, ?after, "Invocation timed out");
                    Err(CliError::Timeout {
                        invocation: command_line.to_string(),
                        after,
                    })
                }
            },
            None => child.await.map_err(spawn_err),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation::new("/bin/sh").with_global_args(["-c", script, "sh"])
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let runner = ProcessRunner::new();
        let output = runner.run(&sh("echo \"$1 $2\"")).await.unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout.trim(), "--format json");
    }

    #[tokio::test]
    async fn test_non_zero_exit_carries_stderr() {
        let runner = ProcessRunner::new();
        let err = runner
            .run(&sh("echo 'Error: board not found' >&2; exit 3"))
            .await
            .unwrap_err();
        assert_eq!(err.stderr(), Some("Error: board not found"));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let runner = ProcessRunner::new();
        let err = runner
            .run(&Invocation::new("/nonexistent/arduino-cli"))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_timeout_kills_hung_process() {
        let runner = ProcessRunner::new().with_timeout(Some(Duration::from_millis(100)));
        let err = runner.run(&sh("sleep 5")).await.unwrap_err();
        assert!(matches!(err, CliError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_cancellation() {
        let runner = ProcessRunner::new();
        let token = CancellationToken::new();
        token.cancel();
        let err = runner
            .run_cancellable(&sh("sleep 5"), &token)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Cancelled { .. }));
    }
}
