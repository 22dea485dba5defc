pub mod cli;
pub mod diagnostics;
pub mod dispatch;
pub mod prompt;

use anyhow::Result;
use clap::Parser;
use gitdeck_core::command_runner::SystemCommandRunner;
use tracing::{error, info};

use crate::cli::Cli;
use crate::diagnostics::DiagnosticsSession;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let diagnostics = DiagnosticsSession::initialize(cli.diagnostics)?;
    if let Some(path) = diagnostics.path() {
        eprintln!("Diagnostics enabled: {}", path.display());
    }
    info!(command = ?cli.command, path = ?cli.path, "starting gitdeck");

    let command_runner = SystemCommandRunner::new();
    let result = dispatch::run_with_deps(cli, &command_runner);
    if let Err(error) = &result {
        error!("{error:#}");
    }
    result
}
