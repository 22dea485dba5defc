use anyhow::Result;
use gitdeck_core::git::{PushMode, branch_name, is_current_branch_line};
use gitdeck_core::names::validate_branch_name;

use crate::{AbortReason, App, Outcome, PushSkip, Session};

impl<'a> App<'a> {
    /// Creates a branch, switches to it and publishes it with tracking.
    pub fn create_branch(&mut self, session: &Session) -> Result<Outcome> {
        let name = self.ask("Name of the new branch")?;
        if name.is_empty() {
            return Ok(Outcome::aborted(AbortReason::EmptyBranchName));
        }
        if let Err(error) = validate_branch_name(&name) {
            return Ok(Outcome::aborted(AbortReason::InvalidBranchName(
                error.to_string(),
            )));
        }

        let git = self.git(session);
        if !git.create_branch(&name) {
            return Ok(Outcome::step_failed("creating the branch"));
        }
        self.console
            .info(&format!("Created and switched to branch '{name}'."));

        if !self.ensure_remote(session)? {
            return Ok(Outcome::LocalOnly(PushSkip::NoRemote));
        }

        if !git.push(&name, PushMode::Track) {
            return Ok(Outcome::step_failed("push"));
        }
        self.console
            .info(&format!("Branch '{name}' pushed to '{}'.", git.remote()));

        Ok(Outcome::Completed)
    }

    pub fn switch_branch(&mut self, session: &Session) -> Result<Outcome> {
        let git = self.git(session);

        let branches = git.list_branches();
        if branches.is_empty() {
            return Ok(Outcome::aborted(AbortReason::NoBranches));
        }

        let Some(selected) = self.pick("Select the branch to switch to", &branches)? else {
            return Ok(Outcome::aborted(AbortReason::SelectionCanceled));
        };
        let name = branch_name(&selected);

        if is_current_branch_line(&selected) {
            self.console.info(&format!("Already on '{name}'."));
            return Ok(Outcome::Completed);
        }

        if !git.switch_branch(name) {
            return Ok(Outcome::step_failed("switching branches"));
        }
        self.console.info(&format!("Switched to branch '{name}'."));

        Ok(Outcome::Completed)
    }
}
