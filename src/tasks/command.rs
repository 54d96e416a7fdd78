//! Command descriptions and their outcomes.

use std::fmt;

/// A single external command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build from a `[program, args...]` vector, as collected from the CLI.
    ///
    /// Returns `None` for an empty vector.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone()).args(args.iter().cloned()))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How an external command finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    /// Exited with the given code.
    Exited(i32),
    /// Terminated by a signal (unix only).
    Signaled(i32),
    /// Could not be started at all.
    SpawnFailed(String),
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        matches!(self, CommandStatus::Exited(0))
    }

    /// Exit code to propagate when this status ends the entrypoint.
    pub fn code(&self) -> Option<i32> {
        match self {
            CommandStatus::Exited(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return CommandStatus::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return CommandStatus::Signaled(signal);
            }
        }

        CommandStatus::Exited(-1)
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Exited(code) => write!(f, "exit status {}", code),
            CommandStatus::Signaled(signal) => write!(f, "killed by signal {}", signal),
            CommandStatus::SpawnFailed(reason) => write!(f, "failed to start: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_args() {
        let cmd = CommandSpec::new("python").args(["manage.py", "migrate"]).arg("--noinput");
        assert_eq!(cmd.to_string(), "python manage.py migrate --noinput");
    }

    #[test]
    fn test_from_argv() {
        assert_eq!(CommandSpec::from_argv(&[]), None);

        let argv = vec!["gunicorn".to_string(), "app.wsgi".to_string()];
        let cmd = CommandSpec::from_argv(&argv).unwrap();
        assert_eq!(cmd.program, "gunicorn");
        assert_eq!(cmd.args, vec!["app.wsgi"]);
    }

    #[test]
    fn test_only_zero_exit_is_success() {
        assert!(CommandStatus::Exited(0).success());
        assert!(!CommandStatus::Exited(1).success());
        assert!(!CommandStatus::Signaled(9).success());
        assert!(!CommandStatus::SpawnFailed("not found".into()).success());
        assert_eq!(CommandStatus::Signaled(9).code(), None);
    }
}
