//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty programs and zero-length wait intervals
//! - Check the log level parses as a filter directive
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EntrypointConfig → Result<(), Vec<ValidationError>>
//! - Disabled sections are not checked

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::EntrypointConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{section}.program must not be empty")]
    EmptyProgram { section: &'static str },

    #[error("database_wait.{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("database_wait.host must not be empty")]
    EmptyHost,

    #[error("env_file.path must not be empty")]
    EmptyEnvPath,

    #[error("observability.log_level `{0}` is not a valid level")]
    InvalidLogLevel(String),
}

pub fn validate_config(config: &EntrypointConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.migrate.program.trim().is_empty() {
        errors.push(ValidationError::EmptyProgram { section: "migrate" });
    }

    if config.collect_static.enabled && config.collect_static.program.trim().is_empty() {
        errors.push(ValidationError::EmptyProgram {
            section: "collect_static",
        });
    }

    let wait = &config.database_wait;
    if wait.enabled {
        if wait.host.trim().is_empty() {
            errors.push(ValidationError::EmptyHost);
        }
        if wait.interval_ms == 0 {
            errors.push(ValidationError::ZeroDuration { field: "interval_ms" });
        }
        if wait.connect_timeout_ms == 0 {
            errors.push(ValidationError::ZeroDuration {
                field: "connect_timeout_ms",
            });
        }
        if wait.timeout_secs == 0 {
            errors.push(ValidationError::ZeroDuration {
                field: "timeout_secs",
            });
        }
    }

    if config.env_file.enabled && config.env_file.path.trim().is_empty() {
        errors.push(ValidationError::EmptyEnvPath);
    }

    let level = &config.observability.log_level;
    if level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
