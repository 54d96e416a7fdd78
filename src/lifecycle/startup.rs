//! Startup orchestration.
//!
//! # Responsibilities
//! - Announce startup on standard output
//! - Run the migration command and block until it finishes
//! - Optionally collect static assets after a successful migration
//! - Report the first failure and stop
//!
//! # Design Decisions
//! - Fail fast: the first failing step ends the sequence, nothing is retried
//! - Steps run in order, not concurrently
//! - Progress lines go to the given writer, structured logs go through `tracing`

use std::io::Write;
use std::path::Path;

use crate::config::EntrypointConfig;
use crate::environment::load_env_file;
use crate::error::{StartupError, StartupResult};
use crate::readiness::{resolve_target, wait_for_database};
use crate::tasks::{CommandRunner, CommandSpec, CommandStatus};

pub const STARTING_MESSAGE: &str = "Starting entrypoint...";
pub const MIGRATIONS_APPLIED_MESSAGE: &str = "Migrations applied";
pub const MIGRATIONS_FAILED_MESSAGE: &str = "Migrations failed";
pub const COLLECTING_STATIC_MESSAGE: &str = "Collecting static files...";
pub const COLLECT_STATIC_FAILED_MESSAGE: &str = "Collectstatic failed";

/// The ordered commands one startup runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupPlan {
    pub migrate: CommandSpec,
    /// `None` unless static collection is enabled.
    pub collect_static: Option<CommandSpec>,
}

impl StartupPlan {
    pub fn from_config(config: &EntrypointConfig) -> Self {
        Self {
            migrate: config.migrate.command(),
            collect_static: config
                .collect_static
                .enabled
                .then(|| config.collect_static.command()),
        }
    }
}

/// A startup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Migrate,
    CollectStatic,
}

/// The result of one executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub command: CommandSpec,
    pub status: CommandStatus,
}

/// Steps executed by a successful startup, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub steps: Vec<StepOutcome>,
}

impl StartupReport {
    pub fn ran(&self, step: Step) -> bool {
        self.steps.iter().any(|s| s.step == step)
    }
}

/// Runs the startup steps once.
///
/// `run` consumes the sequencer: a sequence is attempted at most once.
pub struct StartupSequencer<R, W> {
    plan: StartupPlan,
    runner: R,
    out: W,
}

impl<R, W> StartupSequencer<R, W>
where
    R: CommandRunner,
    W: Write,
{
    pub fn new(plan: StartupPlan, runner: R, out: W) -> Self {
        Self { plan, runner, out }
    }

    pub async fn run(mut self) -> StartupResult<StartupReport> {
        let mut report = StartupReport::default();

        self.say(STARTING_MESSAGE);
        tracing::info!(command = %self.plan.migrate, "Running migrations");

        let status = self.runner.run(&self.plan.migrate).await;
        report.steps.push(StepOutcome {
            step: Step::Migrate,
            command: self.plan.migrate.clone(),
            status: status.clone(),
        });

        if !status.success() {
            self.say(MIGRATIONS_FAILED_MESSAGE);
            tracing::error!(command = %self.plan.migrate, status = %status, "Migrations failed");
            return Err(StartupError::MigrationFailed { status });
        }

        self.say(MIGRATIONS_APPLIED_MESSAGE);
        tracing::info!("Migrations applied");

        if let Some(command) = self.plan.collect_static.clone() {
            self.say(COLLECTING_STATIC_MESSAGE);
            tracing::info!(command = %command, "Collecting static files");

            let status = self.runner.run(&command).await;
            report.steps.push(StepOutcome {
                step: Step::CollectStatic,
                command: command.clone(),
                status: status.clone(),
            });

            if !status.success() {
                self.say(COLLECT_STATIC_FAILED_MESSAGE);
                tracing::error!(command = %command, status = %status, "Collectstatic failed");
                return Err(StartupError::CollectStaticFailed { status });
            }
        }

        Ok(report)
    }

    fn say(&mut self, line: &str) {
        // Best effort, like `echo`.
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write progress message");
        }
    }
}

/// Run every enabled startup step for `config`.
///
/// Order: env file, database wait, then the sequencer. The config must
/// already be validated.
pub async fn run_entrypoint<R, W>(
    config: &EntrypointConfig,
    runner: R,
    out: W,
) -> StartupResult<StartupReport>
where
    R: CommandRunner,
    W: Write,
{
    if config.env_file.enabled {
        load_env_file(Path::new(&config.env_file.path), config.env_file.required)?;
    }

    if config.database_wait.enabled {
        let target = resolve_target(&config.database_wait, |name| std::env::var(name).ok());
        wait_for_database(&target).await?;
    }

    StartupSequencer::new(StartupPlan::from_config(config), runner, out)
        .run()
        .await
}
