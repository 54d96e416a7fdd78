//! Dependency readiness subsystem.
//!
//! # Responsibilities
//! - Resolve the database address from config and environment
//! - Block until the database port accepts TCP connections
//!
//! # Design Decisions
//! - Disabled by default; the stock entrypoint starts migrating immediately
//! - Bounded by a total deadline; never loops forever
//! - A successful TCP connect is the only readiness signal (like `nc -z`)

pub mod database;

pub use database::{resolve_target, wait_for_database, WaitTarget};
