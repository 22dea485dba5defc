use anyhow::{Context, Result};
use gitdeck_core::workspace::{clear_directory, ensure_directory, is_empty_directory};
use tracing::info;

use crate::{App, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapChoice {
    Init,
    Clone,
    Skip,
}

impl BootstrapChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Init),
            "2" => Some(Self::Clone),
            "3" => Some(Self::Skip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Initialized,
    Cloned,
    Skipped,
    /// The init or clone command failed; the menu still runs.
    Failed,
}

impl<'a> App<'a> {
    /// One-time setup of the target directory before the menu.
    pub fn bootstrap(&mut self, session: &Session) -> Result<BootstrapOutcome> {
        let path = session.repo_path();
        ensure_directory(path)
            .with_context(|| format!("failed to create directory {}", path.display()))?;

        loop {
            self.console.info("How should this directory be prepared?");
            self.console.info("  1. Initialize a new repository");
            self.console.info("  2. Clone a remote repository");
            self.console.info("  3. Use it as it is");

            let answer = self.ask("Choose 1, 2 or 3")?;
            let Some(choice) = BootstrapChoice::parse(&answer) else {
                self.console
                    .error(&format!("'{answer}' is not a valid choice."));
                continue;
            };

            let outcome = match choice {
                BootstrapChoice::Init => Some(self.init_repository(session)),
                BootstrapChoice::Clone => self.clone_repository(session)?,
                BootstrapChoice::Skip => Some(BootstrapOutcome::Skipped),
            };

            if let Some(outcome) = outcome {
                info!(?choice, ?outcome, "bootstrap finished");
                return Ok(outcome);
            }
        }
    }

    fn init_repository(&self, session: &Session) -> BootstrapOutcome {
        if self.git(session).init() {
            BootstrapOutcome::Initialized
        } else {
            BootstrapOutcome::Failed
        }
    }

    /// `None` sends the user back to the bootstrap choices.
    fn clone_repository(&mut self, session: &Session) -> Result<Option<BootstrapOutcome>> {
        let url = self.ask("URL of the repository to clone")?;
        if url.is_empty() {
            self.console.error("No URL provided.");
            return Ok(None);
        }

        let path = session.repo_path();
        let is_empty = is_empty_directory(path)
            .with_context(|| format!("failed to read directory {}", path.display()))?;
        if !is_empty {
            self.console.info(&format!(
                "{} is not empty; cloning needs an empty directory.",
                path.display()
            ));
            let overwrite = self.prompt.confirm(
                "Force overwrite? Every entry in the directory will be deleted.",
                false,
            )?;
            if !overwrite {
                return Ok(None);
            }

            let report = clear_directory(path)
                .with_context(|| format!("failed to read directory {}", path.display()))?;
            for failure in &report.failures {
                self.console.error(&format!(
                    "Could not remove {}: {}",
                    failure.path.display(),
                    failure.message
                ));
            }
        }

        if self.git(session).clone_into(&url) {
            Ok(Some(BootstrapOutcome::Cloned))
        } else {
            Ok(Some(BootstrapOutcome::Failed))
        }
    }
}
