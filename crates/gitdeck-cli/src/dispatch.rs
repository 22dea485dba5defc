use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, ContentArrangement, Table};
use gitdeck_app::App;
use gitdeck_core::command_runner::CommandRunner;
use gitdeck_core::config::{load_config_or_default, resolve_config_path};
use gitdeck_core::console::StdConsole;
use gitdeck_core::doctor::{CheckState, DoctorReport, run_doctor_with_runner};
use gitdeck_tui::TerminalListSelector;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::prompt::InquirePromptDriver;

pub fn run_with_deps(cli: Cli, runner: &dyn CommandRunner) -> Result<()> {
    match cli.command {
        Some(Command::Doctor) => run_doctor_command(runner),
        None => run_session_command(runner, cli.path.as_deref()),
    }
}

fn run_session_command(runner: &dyn CommandRunner, preset: Option<&Path>) -> Result<()> {
    let config_path = resolve_config_path().context("failed to resolve gitdeck config path")?;
    let config = load_config_or_default(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    info!(remote = %config.remote.name, "config loaded");

    if !std::io::stdin().is_terminal() {
        bail!("gitdeck needs an interactive terminal; stdin is not a TTY");
    }

    let console = StdConsole::new();
    let mut prompt = InquirePromptDriver::new();
    let mut selector = TerminalListSelector::new();
    let mut app = App::new(runner, &console, &mut prompt, &mut selector, &config);

    app.run_session(preset)
}

fn run_doctor_command(runner: &dyn CommandRunner) -> Result<()> {
    let report = run_doctor_with_runner(runner);
    print_doctor_report(&report);
    Ok(())
}

fn print_doctor_report(report: &DoctorReport) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Check", "Status", "Details"]);

    for check in &report.checks {
        let status = match check.state {
            CheckState::Pass => "PASS",
            CheckState::Fail => "FAIL",
        };

        table.add_row(vec![
            Cell::new(check.name.as_str()),
            Cell::new(status),
            Cell::new(check.details.as_str()),
        ]);
    }

    println!("{table}");
    println!("{}", report.summary());
}
