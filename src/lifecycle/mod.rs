//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load env file → Wait for database → Migrate → Collect static
//!
//! Handoff (handoff.rs):
//!     Sequence succeeded → exec main process (replaces the entrypoint)
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, nothing is retried
//! - Steps run strictly in order, never concurrently
//! - The main process starts last, and only after every step succeeded

pub mod handoff;
pub mod startup;

pub use handoff::exec_main_process;
pub use startup::{run_entrypoint, StartupPlan, StartupReport, StartupSequencer, Step, StepOutcome};
