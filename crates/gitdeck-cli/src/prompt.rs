use anyhow::{Context, Result, anyhow};
use gitdeck_app::PromptDriver;
use inquire::error::InquireResult;
use inquire::{Confirm, InquireError, Text};

/// Line prompts on the controlling terminal. Esc backs out of one question
/// (an empty answer); Ctrl-C ends the session.
#[derive(Debug, Default)]
pub struct InquirePromptDriver;

impl InquirePromptDriver {
    pub fn new() -> Self {
        Self
    }
}

impl PromptDriver for InquirePromptDriver {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::new(message).with_default(default).prompt();
        answer_or_back(answer, false)
            .with_context(|| format!("failed to read an answer to '{message}'"))
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let answer = Text::new(message).prompt();
        answer_or_back(answer, String::new())
            .with_context(|| format!("failed to read an answer to '{message}'"))
    }
}

fn answer_or_back<T>(answer: InquireResult<T>, back: T) -> Result<T> {
    match answer {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled) => Ok(back),
        Err(InquireError::OperationInterrupted) => Err(anyhow!("interrupted by Ctrl-C")),
        Err(error) => Err(error.into()),
    }
}
