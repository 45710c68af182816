//! Subprocess execution
//!
//! Every command runs with an explicit working directory; nothing here
//! touches the process-wide current directory.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use std::fmt;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a program and arguments
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a configured command string on whitespace
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| Error::process_execution("empty command line"))?;
        Ok(Self::new(program, parts))
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd` and return its stdout
    ///
    /// A non-zero exit status is an error carrying stderr.
    async fn run(&self, command: &CommandLine, cwd: &Utf8Path) -> Result<String>;
}

/// [`CommandRunner`] backed by real child processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill commands that run longer than `timeout`
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &CommandLine, cwd: &Utf8Path) -> Result<String> {
        debug!("Running: {} (in {})", command, cwd);

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).current_dir(cwd).kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| Error::Timeout {
                    command: command.to_string(),
                    secs: limit.as_secs(),
                })?,
            None => cmd.output().await,
        };

        let output = output.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::command_not_found(&command.program),
            _ => Error::Io(e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::process_execution(format!(
                "`{}` exited with {}: {}",
                command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check if a command is available in PATH
pub fn ensure_command_available(program: &str) -> Result<()> {
    which::which(program)
        .map(|_| ())
        .map_err(|_| Error::command_not_found(program))
}
