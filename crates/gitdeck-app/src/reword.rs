use anyhow::Result;
use gitdeck_core::git::commit_id;

use crate::{AbortReason, App, Outcome, Session};

impl<'a> App<'a> {
    /// Amends the message of HEAD. The list shows the whole history, but a
    /// selection other than HEAD is refused instead of silently rewording
    /// a different commit.
    pub fn change_commit_message(&mut self, session: &Session) -> Result<Outcome> {
        let git = self.git(session);

        let commits = git.list_commits();
        if commits.is_empty() {
            return Ok(Outcome::aborted(AbortReason::NoCommits));
        }

        let Some(selected) = self.pick("Select the commit to reword (HEAD only)", &commits)? else {
            return Ok(Outcome::aborted(AbortReason::SelectionCanceled));
        };
        let Some(id) = commit_id(&selected) else {
            return Ok(Outcome::aborted(AbortReason::MalformedRecord(selected)));
        };

        let (Some(selected_hash), Some(head_hash)) =
            (git.resolve_commit(id), git.resolve_commit("HEAD"))
        else {
            return Ok(Outcome::step_failed("resolving the selected commit"));
        };
        if selected_hash != head_hash {
            return Ok(Outcome::aborted(AbortReason::NotHeadCommit {
                selected: id.to_string(),
            }));
        }

        let message = self.ask("New message for the commit")?;
        if message.is_empty() {
            return Ok(Outcome::aborted(AbortReason::EmptyMessage));
        }

        if !git.amend_message(&message) {
            return Ok(Outcome::step_failed("amend"));
        }
        self.console.info("Commit message updated.");

        Ok(Outcome::Completed)
    }
}
