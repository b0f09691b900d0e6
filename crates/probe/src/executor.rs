//! Command execution for the diagnostics invocation.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for command execution.
pub trait Executor: Send + Sync {
    /// Run `program` with `args` and wait for it to finish.
    ///
    /// An `Err` means the program could not be started at all; a program
    /// that ran and failed is reported through [`CommandOutput::exit_code`].
    fn execute(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Executor that spawns programs on the local host.
///
/// No shell sits in between, so paths with spaces need no quoting.
pub struct LocalExecutor;

impl LocalExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for LocalExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("Local exec: {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute {}", program))?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
