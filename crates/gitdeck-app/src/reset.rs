use anyhow::Result;
use gitdeck_core::git::{PushMode, commit_id};

use crate::push::push_current_branch;
use crate::{AbortReason, App, Outcome, PushSkip, Session};

impl<'a> App<'a> {
    /// Hard reset to a chosen commit. The force-push afterwards is the only
    /// path that discards remote history and always asks first.
    pub fn reset_hard(&mut self, session: &Session) -> Result<Outcome> {
        let git = self.git(session);

        let commits = git.list_commits();
        if commits.is_empty() {
            return Ok(Outcome::aborted(AbortReason::NoCommits));
        }

        let Some(selected) = self.pick("Select the commit to reset to", &commits)? else {
            return Ok(Outcome::aborted(AbortReason::SelectionCanceled));
        };
        let Some(id) = commit_id(&selected) else {
            return Ok(Outcome::aborted(AbortReason::MalformedRecord(selected)));
        };
        self.console.info(&format!("Selected commit: {selected}"));

        if !git.reset_hard(id) {
            return Ok(Outcome::step_failed("reset"));
        }
        self.console.info(&format!("Reset to commit {id}."));

        let question = format!(
            "Force-push to '{}'? This overwrites the remote branch history and cannot be undone.",
            git.remote()
        );
        if !self.confirm_push(&question)? {
            return Ok(Outcome::LocalOnly(PushSkip::Declined));
        }

        if !self.ensure_remote(session)? {
            return Ok(Outcome::LocalOnly(PushSkip::NoRemote));
        }

        Ok(push_current_branch(&git, PushMode::Force, self.console))
    }
}
