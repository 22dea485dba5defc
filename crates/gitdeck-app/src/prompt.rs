use std::collections::VecDeque;

use anyhow::{Result, anyhow};

/// Line-oriented questions. Implementations return an empty string or
/// `false` when the user backs out of a question; an `Err` ends the session.
pub trait PromptDriver {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
    fn input(&mut self, message: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedPromptResponse {
    Confirm(bool),
    Input(String),
}

impl ScriptedPromptResponse {
    pub fn input(value: &str) -> Self {
        Self::Input(value.to_string())
    }
}

/// Replays canned answers in order; fails on a type mismatch or when the
/// queue runs dry.
#[derive(Debug, Default)]
pub struct ScriptedPromptDriver {
    responses: VecDeque<ScriptedPromptResponse>,
    asked: Vec<String>,
}

impl ScriptedPromptDriver {
    pub fn new(responses: Vec<ScriptedPromptResponse>) -> Self {
        Self {
            responses: responses.into(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }

    fn next_response(&mut self, message: &str) -> Result<ScriptedPromptResponse> {
        self.asked.push(message.to_string());
        self.responses
            .pop_front()
            .ok_or_else(|| anyhow!("prompt response queue is empty (asked: {message})"))
    }
}

impl PromptDriver for ScriptedPromptDriver {
    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next_response(message)? {
            ScriptedPromptResponse::Confirm(value) => Ok(value),
            unexpected => Err(anyhow!("expected confirm response, got {unexpected:?}")),
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        match self.next_response(message)? {
            ScriptedPromptResponse::Input(value) => Ok(value),
            unexpected => Err(anyhow!("expected input response, got {unexpected:?}")),
        }
    }
}
