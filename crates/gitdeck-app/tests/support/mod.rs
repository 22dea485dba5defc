#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::anyhow;
use gitdeck_app::{
    App, ScriptedPromptDriver, ScriptedPromptResponse, ScriptedSelector, Selection, Session,
};
use gitdeck_core::command_runner::{CommandOutput, CommandRunner};
use gitdeck_core::config::GitdeckConfig;
use gitdeck_core::console::Console;

#[derive(Debug, Clone)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Call {
    pub fn line(&self) -> String {
        self.args.join(" ")
    }
}

/// Replays scripted outputs in order and records every invocation.
#[derive(Default)]
pub struct QueueRunner {
    outputs: Mutex<VecDeque<anyhow::Result<CommandOutput>>>,
    calls: Mutex<Vec<Call>>,
}

impl QueueRunner {
    pub fn new(outputs: Vec<anyhow::Result<CommandOutput>>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Joined argument vectors, e.g. `"reset --hard def456"`.
    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(Call::line).collect()
    }

    pub fn remaining(&self) -> usize {
        self.outputs.lock().expect("outputs lock").len()
    }
}

impl CommandRunner for QueueRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> anyhow::Result<CommandOutput> {
        self.calls.lock().expect("calls lock").push(Call {
            program: program.to_string(),
            args: args.iter().map(|value| (*value).to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });

        self.outputs
            .lock()
            .expect("outputs lock")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("missing scripted output for {args:?}")))
    }
}

#[derive(Default)]
pub struct RecordingConsole {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().expect("infos lock").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("errors lock").clone()
    }

    pub fn said(&self, needle: &str) -> bool {
        self.infos()
            .iter()
            .chain(self.errors().iter())
            .any(|line| line.contains(needle))
    }
}

impl Console for RecordingConsole {
    fn info(&self, message: &str) {
        self.infos
            .lock()
            .expect("infos lock")
            .push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors
            .lock()
            .expect("errors lock")
            .push(message.to_string());
    }
}

pub fn output(stdout: &str, stderr: &str, status: i32) -> anyhow::Result<CommandOutput> {
    Ok(CommandOutput {
        status_code: status,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
    })
}

pub fn ok(stdout: &str) -> anyhow::Result<CommandOutput> {
    output(stdout, "", 0)
}

pub fn fail(stderr: &str) -> anyhow::Result<CommandOutput> {
    output("", stderr, 1)
}

pub const MUTATING_VERBS: [&str; 10] = [
    "add", "commit", "reset", "revert", "rebase", "checkout", "pull", "push", "clone", "init",
];

/// True when any recorded call changes the repository or the remote.
pub fn mutated(runner: &QueueRunner) -> bool {
    runner.calls().iter().any(|call| {
        let verb = call.args.first().map(String::as_str).unwrap_or_default();
        MUTATING_VERBS.contains(&verb)
            || (verb == "remote" && call.args.get(1).map(String::as_str) == Some("add"))
    })
}

/// Scripted collaborators for one operation run.
pub struct Fixture {
    pub runner: QueueRunner,
    pub console: RecordingConsole,
    pub prompt: ScriptedPromptDriver,
    pub selector: ScriptedSelector,
    pub config: GitdeckConfig,
    pub session: Session,
}

impl Fixture {
    pub fn new(
        outputs: Vec<anyhow::Result<CommandOutput>>,
        answers: Vec<ScriptedPromptResponse>,
        selections: Vec<Selection>,
    ) -> Self {
        Self::in_repo(Path::new("/tmp/gitdeck-repo"), outputs, answers, selections)
    }

    pub fn in_repo(
        repo: &Path,
        outputs: Vec<anyhow::Result<CommandOutput>>,
        answers: Vec<ScriptedPromptResponse>,
        selections: Vec<Selection>,
    ) -> Self {
        Self {
            runner: QueueRunner::new(outputs),
            console: RecordingConsole::default(),
            prompt: ScriptedPromptDriver::new(answers),
            selector: ScriptedSelector::new(selections),
            config: GitdeckConfig::default(),
            session: Session::new(repo),
        }
    }

    pub fn run<T>(
        &mut self,
        operation: impl FnOnce(&mut App<'_>, &Session) -> anyhow::Result<T>,
    ) -> T {
        let mut app = App::new(
            &self.runner,
            &self.console,
            &mut self.prompt,
            &mut self.selector,
            &self.config,
        );
        operation(&mut app, &self.session).expect("operation should not fail")
    }
}
