mod bootstrap;
mod branch;
mod commit;
mod menu;
mod outcome;
pub mod prompt;
mod push;
mod remote;
mod reset;
mod revert;
mod reword;
pub mod selector;
mod session;

use anyhow::Result;
use gitdeck_core::command_runner::CommandRunner;
use gitdeck_core::config::GitdeckConfig;
use gitdeck_core::console::Console;
use gitdeck_core::git::Git;

pub use bootstrap::{BootstrapChoice, BootstrapOutcome};
pub use menu::{MenuChoice, Operation};
pub use outcome::{AbortReason, Outcome, PushSkip};
pub use prompt::{PromptDriver, ScriptedPromptDriver, ScriptedPromptResponse};
pub use selector::{ListSelector, ScriptedSelector, Selection};
pub use session::Session;

/// Everything an operation needs besides the session: the process
/// boundary, the console, the two input seams and the loaded config.
pub struct App<'a> {
    runner: &'a dyn CommandRunner,
    console: &'a dyn Console,
    prompt: &'a mut dyn PromptDriver,
    selector: &'a mut dyn ListSelector,
    config: &'a GitdeckConfig,
}

impl<'a> App<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        console: &'a dyn Console,
        prompt: &'a mut dyn PromptDriver,
        selector: &'a mut dyn ListSelector,
        config: &'a GitdeckConfig,
    ) -> Self {
        Self {
            runner,
            console,
            prompt,
            selector,
            config,
        }
    }

    fn git<'s>(&self, session: &'s Session) -> Git<'s>
    where
        'a: 's,
    {
        Git::new(
            self.runner,
            self.console,
            session.repo_path(),
            self.config.remote.name.as_str(),
        )
    }

    /// Shows `items` in the selector and returns the chosen line.
    fn pick(&mut self, title: &str, items: &[String]) -> Result<Option<String>> {
        match self.selector.select(title, items)? {
            Selection::Picked(index) => Ok(items.get(index).cloned()),
            Selection::Canceled => Ok(None),
        }
    }

    /// Trimmed answer; empty means the user gave nothing.
    fn ask(&mut self, message: &str) -> Result<String> {
        Ok(self.prompt.input(message)?.trim().to_string())
    }
}
