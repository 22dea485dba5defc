use std::path::Path;

use tracing::warn;

use crate::command_runner::CommandRunner;
use crate::console::Console;
use crate::git::GitError;

pub const GIT_PROGRAM: &str = "git";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    Silent,
    Loud,
}

/// Runs git and reports failures on the console. Callers only ever see
/// `Some(stdout)` or `None`.
pub struct Executor<'a> {
    runner: &'a dyn CommandRunner,
    console: &'a dyn Console,
}

impl<'a> Executor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, console: &'a dyn Console) -> Self {
        Self { runner, console }
    }

    /// Returns stdout with trailing whitespace trimmed. A nonzero exit or a
    /// spawn failure is reported on the error stream and yields `None`.
    pub fn execute(&self, args: &[&str], cwd: &Path, echo: Echo) -> Option<String> {
        match self.run_checked(args, cwd) {
            Ok(stdout) => {
                if echo == Echo::Loud && !stdout.is_empty() {
                    self.console.info(&stdout);
                }
                Some(stdout)
            }
            Err(error) => {
                warn!(%error, "git command failed");
                self.console.error(&error.to_string());
                None
            }
        }
    }

    /// Like `execute` but never writes to the console, on success or failure.
    pub fn query(&self, args: &[&str], cwd: &Path) -> Option<String> {
        self.run_checked(args, cwd).ok()
    }

    pub fn probe(&self, args: &[&str], cwd: &Path) -> bool {
        self.query(args, cwd).is_some()
    }

    fn run_checked(&self, args: &[&str], cwd: &Path) -> Result<String, GitError> {
        let output = self
            .runner
            .run(GIT_PROGRAM, args, Some(cwd))
            .map_err(|error| GitError::Execute(format!("{GIT_PROGRAM}: {error}")))?;

        if !output.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                status: output.status_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout.trim_end().to_string())
    }
}
