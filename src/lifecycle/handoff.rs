//! Handing control to the main process.

use std::process::Command;

use crate::error::{StartupError, StartupResult};
use crate::tasks::CommandSpec;

/// Replace the current process with `command`.
///
/// On unix this only returns if `exec` failed. Elsewhere the command is run
/// as a child and its exit code is returned.
pub fn exec_main_process(command: &CommandSpec) -> StartupResult<i32> {
    tracing::info!(command = %command, "Handing off to main process");

    let mut process = Command::new(&command.program);
    process.args(&command.args);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;

        let source = process.exec();
        Err(StartupError::HandoffFailed {
            program: command.program.clone(),
            source,
        })
    }

    #[cfg(not(unix))]
    {
        let status = process
            .status()
            .map_err(|source| StartupError::HandoffFailed {
                program: command.program.clone(),
                source,
            })?;
        Ok(status.code().unwrap_or(1))
    }
}
