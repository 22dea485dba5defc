use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::{App, Outcome, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CommitAndPush,
    Reset,
    Revert,
    Reword,
    CreateBranch,
    SwitchBranch,
    Push,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::CommitAndPush,
        Operation::Reset,
        Operation::Revert,
        Operation::Reword,
        Operation::CreateBranch,
        Operation::SwitchBranch,
        Operation::Push,
    ];

    pub fn key(self) -> char {
        match self {
            Self::CommitAndPush => '1',
            Self::Reset => '2',
            Self::Revert => '3',
            Self::Reword => '4',
            Self::CreateBranch => '5',
            Self::SwitchBranch => '6',
            Self::Push => '7',
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::CommitAndPush => "Commit and push",
            Self::Reset => "Reset to a commit (hard)",
            Self::Revert => "Revert a commit",
            Self::Reword => "Change the last commit message",
            Self::CreateBranch => "Create a branch",
            Self::SwitchBranch => "Switch branch",
            Self::Push => "Push the current branch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == "0" {
            return Some(Self::Exit);
        }

        let mut chars = raw.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return None;
        };

        Operation::ALL
            .into_iter()
            .find(|operation| operation.key() == key)
            .map(Self::Run)
    }
}

impl<'a> App<'a> {
    pub fn run_operation(&mut self, session: &Session, operation: Operation) -> Result<Outcome> {
        info!(?operation, repo = %session.repo_path().display(), "starting operation");

        let outcome = match operation {
            Operation::CommitAndPush => self.commit_and_push(session)?,
            Operation::Reset => self.reset_hard(session)?,
            Operation::Revert => self.revert(session)?,
            Operation::Reword => self.change_commit_message(session)?,
            Operation::CreateBranch => self.create_branch(session)?,
            Operation::SwitchBranch => self.switch_branch(session)?,
            Operation::Push => self.push(session)?,
        };

        info!(?operation, ?outcome, "operation finished");
        Ok(outcome)
    }

    /// Loops until the user picks exit. Operation outcomes are reported and
    /// never end the loop; only infrastructure errors do.
    pub fn run_menu(&mut self, session: &Session) -> Result<()> {
        loop {
            self.print_menu(session);

            let answer = self.ask("Choose an option")?;
            let Some(choice) = MenuChoice::parse(&answer) else {
                self.console
                    .error(&format!("'{answer}' is not a valid option."));
                continue;
            };

            match choice {
                MenuChoice::Exit => {
                    self.console.info("Bye.");
                    return Ok(());
                }
                MenuChoice::Run(operation) => {
                    let outcome = self.run_operation(session, operation)?;
                    match outcome {
                        Outcome::Aborted(_) => self.console.error(&outcome.message()),
                        _ => self.console.info(&outcome.message()),
                    }
                }
            }
        }
    }

    /// Whole interactive run: path, bootstrap, then the menu.
    pub fn run_session(&mut self, preset: Option<&Path>) -> Result<()> {
        let session = self.resolve_session(preset)?;
        self.bootstrap(&session)?;
        self.run_menu(&session)
    }

    fn print_menu(&self, session: &Session) {
        self.console.info("");
        self.console
            .info(&format!("Repository: {}", session.repo_path().display()));
        for operation in Operation::ALL {
            self.console
                .info(&format!("  {}. {}", operation.key(), operation.title()));
        }
        self.console.info("  0. Exit");
    }
}
