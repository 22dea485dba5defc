use anyhow::Result;
use gitdeck_core::console::Console;
use gitdeck_core::git::{Git, PushMode};

use crate::{AbortReason, App, Outcome, Session};

impl<'a> App<'a> {
    /// Menu entry: push the current branch, configuring a remote first if
    /// needed.
    pub fn push(&mut self, session: &Session) -> Result<Outcome> {
        if !self.ensure_remote(session)? {
            return Ok(Outcome::aborted(AbortReason::NoRemote));
        }

        let git = self.git(session);
        Ok(push_current_branch(&git, PushMode::Track, self.console))
    }

    /// Push questions default to "no"; an empty answer keeps everything local.
    pub(crate) fn confirm_push(&mut self, message: &str) -> Result<bool> {
        self.prompt.confirm(message, false)
    }
}

pub(crate) fn push_current_branch(
    git: &Git<'_>,
    mode: PushMode,
    console: &dyn Console,
) -> Outcome {
    let Some(branch) = git.current_branch() else {
        return Outcome::step_failed("resolving the current branch");
    };

    if branch == "HEAD" {
        return Outcome::aborted(AbortReason::DetachedHead);
    }

    let verb = match mode {
        PushMode::Force => "Force-pushing",
        PushMode::Track | PushMode::Plain => "Pushing",
    };
    console.info(&format!("{verb} '{branch}' to '{}'...", git.remote()));

    if git.push(&branch, mode) {
        Outcome::Completed
    } else {
        Outcome::step_failed("push")
    }
}
