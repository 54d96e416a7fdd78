//! External command subsystem.
//!
//! # Data Flow
//! ```text
//! EntrypointConfig section
//!     → CommandSpec (program + args)
//!     → CommandRunner::run (blocks until the child exits)
//!     → CommandStatus (success / exit code / signal / spawn failure)
//! ```
//!
//! # Design Decisions
//! - Children inherit stdin/stdout/stderr so tool output reaches the container log
//! - Runner is a trait so the sequencer can be tested without spawning processes
//! - Spawn failures are a status, not an error; the caller decides what is fatal

pub mod command;
pub mod runner;

pub use command::{CommandSpec, CommandStatus};
pub use runner::{CommandRunner, ProcessRunner};
