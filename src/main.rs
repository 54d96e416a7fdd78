//! Container entrypoint.
//!
//! ```text
//!   entrypoint [OPTIONS] [-- COMMAND...]
//!
//!   ┌──────────┐   ┌───────────┐   ┌─────────┐   ┌────────────────┐   ┌──────────────┐
//!   │ .env     │──▶│ wait for  │──▶│ migrate │──▶│ collectstatic  │──▶│ exec COMMAND │
//!   │ (opt-in) │   │ db (opt)  │   │         │   │ (opt-in)       │   │ (if given)   │
//!   └──────────┘   └───────────┘   └────┬────┘   └────────────────┘   └──────────────┘
//!                                       │ failure
//!                                       ▼
//!                              "Migrations failed", exit 1
//! ```
//!
//! With no options this runs `python manage.py migrate --noinput` and exits
//! with 0 on success or 1 on failure.

use std::path::PathBuf;

use clap::Parser;

use entrypoint::config::loader::read_config;
use entrypoint::config::validation::validate_config;
use entrypoint::config::{ConfigError, EntrypointConfig, ObservabilityConfig};
use entrypoint::observability::logging;
use entrypoint::{
    exec_main_process, run_entrypoint, CommandSpec, ExitCode, ProcessRunner, StartupResult,
};

#[derive(Debug, Parser)]
#[command(name = "entrypoint")]
#[command(version, about = "Run startup tasks, then hand off to the main process", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Collect static files after migrating
    #[arg(long)]
    collect_static: bool,

    /// Wait for the database port before migrating
    #[arg(long)]
    wait_for_db: bool,

    /// Load variables from this env file (must exist)
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Main process to exec after a successful startup
    #[arg(last = true, value_name = "COMMAND")]
    command: Vec<String>,
}

impl Cli {
    /// Read the config file, apply flag overrides, and validate the result.
    fn load_config(&self) -> StartupResult<EntrypointConfig> {
        let mut config = read_config(self.config.as_deref())?;

        if self.collect_static {
            config.collect_static.enabled = true;
        }
        if self.wait_for_db {
            config.database_wait.enabled = true;
        }
        if let Some(path) = &self.env_file {
            config.env_file.enabled = true;
            config.env_file.path = path.display().to_string();
            config.env_file.required = true;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Failed to load configuration");
            return e.exit_code().into();
        }
    };

    logging::init(&config.observability);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "entrypoint starting");

    if let Err(e) = run_entrypoint(&config, ProcessRunner::new(), std::io::stdout()).await {
        tracing::error!(error = %e, "Startup aborted");
        return e.exit_code().into();
    }

    let Some(command) = CommandSpec::from_argv(&cli.command) else {
        tracing::info!("Startup complete");
        return ExitCode::Success.into();
    };

    match exec_main_process(&command) {
        Ok(code) => std::process::ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            tracing::error!(error = %e, "Handoff failed");
            e.exit_code().into()
        }
    }
}
