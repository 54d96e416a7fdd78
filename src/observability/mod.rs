//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → logging.rs (filter + format, written to stderr)
//!
//! Consumers:
//!     → Container log driver (stderr)
//! ```
//!
//! # Design Decisions
//! - Structured logs go to stderr; stdout carries only the progress lines
//! - `RUST_LOG` overrides the configured level

pub mod logging;
