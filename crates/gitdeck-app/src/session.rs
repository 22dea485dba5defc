use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::App;

/// The repository every operation of one run works on. Set once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    repo_path: PathBuf,
}

impl Session {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    /// Anchors a user-typed path to the current directory.
    pub fn from_user_path(raw: &str) -> Result<Self> {
        let path = std::path::absolute(Path::new(raw))
            .with_context(|| format!("failed to resolve path '{raw}'"))?;
        Ok(Self::new(path))
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

impl<'a> App<'a> {
    /// Uses `preset` when given, otherwise asks until a non-empty path is
    /// typed.
    pub fn resolve_session(&mut self, preset: Option<&Path>) -> Result<Session> {
        if let Some(path) = preset {
            return Session::from_user_path(&path.to_string_lossy());
        }

        loop {
            let answer = self.ask("Path of the repository (existing or to be created)")?;
            if !answer.is_empty() {
                return Session::from_user_path(&answer);
            }

            self.console.error("A path is required.");
        }
    }
}
