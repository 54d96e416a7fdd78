//! Command execution.

use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;

use crate::tasks::command::{CommandSpec, CommandStatus};

/// Runs one external command to completion.
pub trait CommandRunner {
    fn run(&self, command: &CommandSpec) -> impl Future<Output = CommandStatus>;
}

/// Spawns real child processes with inherited standard streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &CommandSpec) -> CommandStatus {
        tracing::debug!(command = %command, "Spawning command");

        let result = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;

        match result {
            Ok(status) => {
                let status = CommandStatus::from(status);
                tracing::debug!(command = %command, status = %status, "Command finished");
                status
            }
            Err(e) => {
                tracing::warn!(command = %command, error = %e, "Failed to spawn command");
                CommandStatus::SpawnFailed(e.to_string())
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exit_codes_are_reported() {
        let runner = ProcessRunner::new();

        let ok = runner.run(&CommandSpec::new("sh").args(["-c", "exit 0"])).await;
        assert_eq!(ok, CommandStatus::Exited(0));

        let failed = runner.run(&CommandSpec::new("sh").args(["-c", "exit 3"])).await;
        assert_eq!(failed, CommandStatus::Exited(3));
    }

    #[tokio::test]
    async fn test_signal_is_reported() {
        let runner = ProcessRunner::new();
        let status = runner
            .run(&CommandSpec::new("sh").args(["-c", "kill -9 $$"]))
            .await;
        assert_eq!(status, CommandStatus::Signaled(9));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let runner = ProcessRunner::new();
        let status = runner
            .run(&CommandSpec::new("entrypoint-test-no-such-program"))
            .await;
        assert!(matches!(status, CommandStatus::SpawnFailed(_)));
    }
}
