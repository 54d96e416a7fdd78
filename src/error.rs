//! Startup error definitions and exit codes.

use std::time::Duration;

use thiserror::Error;

use crate::config::ConfigError;
use crate::tasks::CommandStatus;

/// Process exit codes.
///
/// Mapping:
///   0 — every step succeeded
///   1 — a startup step failed
///   2 — invalid configuration or usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Usage = 2,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(u8::from(code))
    }
}

/// Errors that abort the startup sequence.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The migration command did not succeed.
    #[error("Migrations failed ({status})")]
    MigrationFailed { status: CommandStatus },

    /// The static asset collection command did not succeed.
    #[error("Collectstatic failed ({status})")]
    CollectStaticFailed { status: CommandStatus },

    /// The database port never accepted a connection.
    #[error("Database at {addr} not reachable after {waited:?}")]
    DatabaseUnavailable { addr: String, waited: Duration },

    /// An explicitly requested env file could not be loaded.
    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// The main process could not be started.
    #[error("Failed to start main process `{program}`: {source}")]
    HandoffFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl StartupError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            StartupError::Config(_) => ExitCode::Usage,
            _ => ExitCode::Failure,
        }
    }
}

/// Result type for startup operations.
pub type StartupResult<T> = Result<T, StartupError>;
