use anyhow::Result;
use gitdeck_core::git::PushMode;

use crate::push::push_current_branch;
use crate::{AbortReason, App, Outcome, PushSkip, Session};

impl<'a> App<'a> {
    /// Stage everything, commit, rebase onto the remote and optionally push.
    pub fn commit_and_push(&mut self, session: &Session) -> Result<Outcome> {
        let git = self.git(session);

        match git.has_pending_changes() {
            None => return Ok(Outcome::step_failed("reading the working tree status")),
            Some(false) => return Ok(Outcome::aborted(AbortReason::NothingToCommit)),
            Some(true) => {}
        }

        let message = self.ask("Commit message")?;
        if message.is_empty() {
            return Ok(Outcome::aborted(AbortReason::EmptyMessage));
        }

        if !git.stage_all() {
            return Ok(Outcome::step_failed("staging changes"));
        }
        if !git.commit(&message) {
            return Ok(Outcome::step_failed("commit"));
        }

        if !self.ensure_remote(session)? {
            return Ok(Outcome::LocalOnly(PushSkip::NoRemote));
        }

        let pull_branch = self
            .config
            .remote
            .pull_branch
            .clone()
            .or_else(|| git.remote_default_branch());
        match pull_branch {
            Some(branch) => {
                self.console.info(&format!(
                    "Pulling '{branch}' from '{}' with rebase to avoid a non-fast-forward push...",
                    git.remote()
                ));
                if !git.pull_rebase(&branch) {
                    if git.abort_rebase() {
                        self.console.info(
                            "The rebase was abandoned; the branch is back at the local commit.",
                        );
                    }
                    return Ok(Outcome::step_failed("rebase-pull (the local commit was kept)"));
                }
            }
            None => self.console.info(&format!(
                "Remote '{}' has no default branch yet; skipping pull.",
                git.remote()
            )),
        }

        if !self.confirm_push("Push the changes to the remote?")? {
            return Ok(Outcome::LocalOnly(PushSkip::Declined));
        }

        Ok(push_current_branch(&git, PushMode::Track, self.console))
    }
}
