use anyhow::Result;
use gitdeck_core::git::{PushMode, commit_id};

use crate::push::push_current_branch;
use crate::{AbortReason, App, Outcome, PushSkip, Session};

impl<'a> App<'a> {
    pub fn revert(&mut self, session: &Session) -> Result<Outcome> {
        let git = self.git(session);

        let commits = git.list_commits();
        if commits.is_empty() {
            return Ok(Outcome::aborted(AbortReason::NoCommits));
        }

        let Some(selected) = self.pick("Select the commit to revert", &commits)? else {
            return Ok(Outcome::aborted(AbortReason::SelectionCanceled));
        };
        let Some(id) = commit_id(&selected) else {
            return Ok(Outcome::aborted(AbortReason::MalformedRecord(selected)));
        };
        self.console.info(&format!("Selected commit: {selected}"));

        let message = self.ask("Message for the revert commit")?;
        if message.is_empty() {
            return Ok(Outcome::aborted(AbortReason::EmptyMessage));
        }

        if !git.revert(id) {
            if git.abort_revert() {
                self.console
                    .info("The revert was abandoned; the repository is back at HEAD.");
            }
            return Ok(Outcome::step_failed("revert"));
        }
        if !git.amend_message(&message) {
            return Ok(Outcome::step_failed(
                "setting the revert message (the revert commit was kept with git's message)",
            ));
        }
        self.console.info(&format!("Reverted commit {id}."));

        if !self.confirm_push("Push the changes to the remote?")? {
            return Ok(Outcome::LocalOnly(PushSkip::Declined));
        }

        if !self.ensure_remote(session)? {
            return Ok(Outcome::LocalOnly(PushSkip::NoRemote));
        }

        Ok(push_current_branch(&git, PushMode::Plain, self.console))
    }
}
