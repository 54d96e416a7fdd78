//! Container entrypoint library.
//!
//! Runs the startup steps of a web application (database migration, then
//! optionally static asset collection) and hands control to the main process.

pub mod config;
pub mod environment;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod readiness;
pub mod tasks;

pub use config::schema::EntrypointConfig;
pub use error::{ExitCode, StartupError, StartupResult};
pub use lifecycle::{exec_main_process, run_entrypoint, StartupSequencer};
pub use tasks::{CommandRunner, CommandSpec, ProcessRunner};
