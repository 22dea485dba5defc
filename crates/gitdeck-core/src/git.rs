use std::path::Path;

use thiserror::Error;

use crate::command_runner::CommandRunner;
use crate::console::Console;
use crate::executor::{Echo, Executor};

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git {command} failed (exit {status}): {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },
    #[error("failed to execute git command: {0}")]
    Execute(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushMode {
    /// `push -u`, records the upstream.
    Track,
    Plain,
    /// Overwrites the remote branch even when histories diverged.
    Force,
}

/// Typed git verbs for one repository. Every method goes through the
/// executor, so failures are already reported when `None`/`false` comes back.
pub struct Git<'a> {
    executor: Executor<'a>,
    repo: &'a Path,
    remote: &'a str,
}

impl<'a> Git<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        console: &'a dyn Console,
        repo: &'a Path,
        remote: &'a str,
    ) -> Self {
        Self {
            executor: Executor::new(runner, console),
            repo,
            remote,
        }
    }

    pub fn remote(&self) -> &str {
        self.remote
    }

    pub fn list_commits(&self) -> Vec<String> {
        self.lines(&["log", "--oneline", "--decorate", "--all", "--no-color"])
    }

    pub fn list_branches(&self) -> Vec<String> {
        self.lines(&["branch", "--no-color"])
    }

    /// `None` when the status query itself failed.
    pub fn has_pending_changes(&self) -> Option<bool> {
        self.executor
            .execute(&["status", "--porcelain"], self.repo, Echo::Silent)
            .map(|stdout| !stdout.trim().is_empty())
    }

    pub fn stage_all(&self) -> bool {
        self.mutate(&["add", "-A"])
    }

    pub fn commit(&self, message: &str) -> bool {
        self.mutate(&["commit", "-m", message])
    }

    pub fn reset_hard(&self, commit_id: &str) -> bool {
        self.mutate(&["reset", "--hard", commit_id])
    }

    /// Creates the inverse commit with git's generated message.
    pub fn revert(&self, commit_id: &str) -> bool {
        self.mutate(&["revert", "--no-edit", commit_id])
    }

    /// Drops a revert stopped on conflicts and restores HEAD and the tree.
    /// False when no revert was in progress.
    pub fn abort_revert(&self) -> bool {
        self.executor.probe(&["revert", "--abort"], self.repo)
    }

    pub fn amend_message(&self, message: &str) -> bool {
        self.mutate(&["commit", "--amend", "-m", message])
    }

    /// Full object name of a revision, without reporting failures.
    pub fn resolve_commit(&self, revision: &str) -> Option<String> {
        let spec = format!("{revision}^{{commit}}");
        self.executor
            .query(&["rev-parse", "--verify", "--quiet", spec.as_str()], self.repo)
            .filter(|hash| !hash.is_empty())
    }

    pub fn create_branch(&self, name: &str) -> bool {
        self.mutate(&["checkout", "-b", name])
    }

    pub fn switch_branch(&self, name: &str) -> bool {
        self.mutate(&["checkout", name])
    }

    pub fn current_branch(&self) -> Option<String> {
        self.executor
            .execute(
                &["rev-parse", "--abbrev-ref", "HEAD"],
                self.repo,
                Echo::Silent,
            )
            .map(|stdout| stdout.trim().to_string())
            .filter(|branch| !branch.is_empty())
    }

    pub fn has_remote(&self) -> bool {
        self.executor
            .probe(&["remote", "get-url", self.remote], self.repo)
    }

    pub fn add_remote(&self, url: &str) -> bool {
        self.mutate(&["remote", "add", self.remote, url])
    }

    /// Default branch of the remote: the local `refs/remotes/<remote>/HEAD`
    /// when present, otherwise whatever the remote advertises. `None` for an
    /// empty or unreachable remote.
    pub fn remote_default_branch(&self) -> Option<String> {
        let reference = format!("refs/remotes/{}/HEAD", self.remote);
        let prefix = format!("{}/", self.remote);
        let tracked = self
            .executor
            .query(&["symbolic-ref", "--short", reference.as_str()], self.repo)
            .map(|value| {
                value
                    .trim()
                    .strip_prefix(prefix.as_str())
                    .unwrap_or(value.trim())
                    .to_string()
            })
            .filter(|branch| !branch.is_empty());

        tracked.or_else(|| {
            self.executor
                .query(&["ls-remote", "--symref", self.remote, "HEAD"], self.repo)
                .and_then(|stdout| parse_symref_head(&stdout))
        })
    }

    pub fn pull_rebase(&self, branch: &str) -> bool {
        self.mutate(&["pull", "--rebase", self.remote, branch])
    }

    /// False when no rebase was in progress.
    pub fn abort_rebase(&self) -> bool {
        self.executor.probe(&["rebase", "--abort"], self.repo)
    }

    pub fn push(&self, branch: &str, mode: PushMode) -> bool {
        let args: Vec<&str> = match mode {
            PushMode::Track => vec!["push", "-u", self.remote, branch],
            PushMode::Plain => vec!["push", self.remote, branch],
            PushMode::Force => vec!["push", "--force", self.remote, branch],
        };
        self.mutate(&args)
    }

    pub fn init(&self) -> bool {
        self.mutate(&["init"])
    }

    /// Clones into the repository directory itself.
    pub fn clone_into(&self, url: &str) -> bool {
        self.mutate(&["clone", url, "."])
    }

    fn mutate(&self, args: &[&str]) -> bool {
        self.executor
            .execute(args, self.repo, Echo::Loud)
            .is_some()
    }

    fn lines(&self, args: &[&str]) -> Vec<String> {
        self.executor
            .execute(args, self.repo, Echo::Silent)
            .map(|stdout| {
                stdout.lines().map(str::to_string).collect()
            })
            .unwrap_or_default()
    }
}

fn parse_symref_head(raw: &str) -> Option<String> {
    raw.lines()
        .filter_map(|line| line.strip_prefix("ref: refs/heads/"))
        .find_map(|rest| rest.split_whitespace().next())
        .map(str::to_string)
}

/// Identifier at the start of a `log --oneline` line.
pub fn commit_id(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Branch name from a `git branch` line, without the current/worktree marker.
pub fn branch_name(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(['*', '+'])
        .trim()
}

pub fn is_current_branch_line(line: &str) -> bool {
    line.trim_start().starts_with('*')
}
