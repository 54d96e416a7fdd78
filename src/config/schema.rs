//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the entrypoint.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::tasks::CommandSpec;

/// Root configuration for the entrypoint.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EntrypointConfig {
    /// Database migration step (always runs).
    pub migrate: MigrateConfig,

    /// Static asset collection step (opt-in).
    pub collect_static: CollectStaticConfig,

    /// Database readiness wait (opt-in).
    pub database_wait: DatabaseWaitConfig,

    /// `.env` file loading (opt-in).
    pub env_file: EnvFileConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Migration command configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Program to execute (looked up on `PATH`).
    pub program: String,

    /// Arguments, including the non-interactive flag.
    pub args: Vec<String>,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec![
                "manage.py".to_string(),
                "migrate".to_string(),
                "--noinput".to_string(),
            ],
        }
    }
}

impl MigrateConfig {
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.program).args(&self.args)
    }
}

/// Static asset collection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectStaticConfig {
    /// Run the step after a successful migration.
    pub enabled: bool,

    pub program: String,

    pub args: Vec<String>,
}

impl Default for CollectStaticConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            program: "python".to_string(),
            args: vec![
                "manage.py".to_string(),
                "collectstatic".to_string(),
                "--noinput".to_string(),
            ],
        }
    }
}

impl CollectStaticConfig {
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.program).args(&self.args)
    }
}

/// Database readiness wait configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseWaitConfig {
    /// Block until the database port accepts connections.
    pub enabled: bool,

    /// Fallback host when `host_env` is unset.
    pub host: String,

    /// Fallback port when `port_env` is unset.
    pub port: u16,

    /// Environment variable holding the database host.
    pub host_env: String,

    /// Environment variable holding the database port.
    pub port_env: String,

    /// Delay between connection attempts in milliseconds.
    pub interval_ms: u64,

    /// Deadline for a single connection attempt in milliseconds.
    pub connect_timeout_ms: u64,

    /// Total time to wait before giving up, in seconds.
    pub timeout_secs: u64,
}

impl Default for DatabaseWaitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "localhost".to_string(),
            port: 5432,
            host_env: "DB_HOST".to_string(),
            port_env: "DB_PORT".to_string(),
            interval_ms: 100,
            connect_timeout_ms: 1000,
            timeout_secs: 60,
        }
    }
}

/// `.env` file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnvFileConfig {
    pub enabled: bool,

    /// Path relative to the working directory.
    pub path: String,

    /// Fail startup when the file is missing.
    pub required: bool,
}

impl Default for EnvFileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: ".env".to_string(),
            required: false,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
