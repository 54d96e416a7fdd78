//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! entrypoint.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flag overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → EntrypointConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and never reloaded
//! - All fields have defaults; no file at all reproduces the stock script
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CollectStaticConfig, DatabaseWaitConfig, EntrypointConfig, EnvFileConfig, LogFormat,
    MigrateConfig, ObservabilityConfig,
};
