use std::env;
use std::fmt;
use std::path::Path;

use crate::command_runner::{CommandRunner, SystemCommandRunner};
use crate::config::{load_config, resolve_config_path};
use crate::executor::GIT_PROGRAM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Pass,
    Fail,
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCheck {
    pub name: String,
    pub state: CheckState,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.state == CheckState::Fail)
    }

    pub fn summary(&self) -> String {
        let passed = self
            .checks
            .iter()
            .filter(|check| check.state == CheckState::Pass)
            .count();
        let failed = self.checks.len().saturating_sub(passed);
        format!("{passed} passed, {failed} failed")
    }
}

pub fn run_doctor() -> DoctorReport {
    let runner = SystemCommandRunner::new();
    run_doctor_with_runner(&runner)
}

pub fn run_doctor_with_runner(runner: &dyn CommandRunner) -> DoctorReport {
    let mut checks = Vec::new();

    checks.push(if is_executable_in_path(GIT_PROGRAM) {
        pass_check("git is installed", "git executable found in PATH")
    } else {
        fail_check("git is installed", "git executable not found in PATH")
    });

    checks.push(check_git_callable(runner));

    match resolve_config_path() {
        Ok(config_path) if !config_path.exists() => checks.push(pass_check(
            "config file",
            format!(
                "no config at {}; using defaults",
                config_path.display()
            ),
        )),
        Ok(config_path) => checks.push(match load_config(&config_path) {
            Ok(config) => pass_check(
                "config file",
                format!(
                    "{} is valid (remote '{}')",
                    config_path.display(),
                    config.remote.name
                ),
            ),
            Err(error) => fail_check("config file", error.to_string()),
        }),
        Err(error) => checks.push(fail_check("config file", error.to_string())),
    }

    DoctorReport { checks }
}

fn check_git_callable(runner: &dyn CommandRunner) -> DoctorCheck {
    match runner.run(GIT_PROGRAM, &["--version"], None) {
        Ok(output) if output.success() => {
            pass_check("git is callable", output.stdout.trim().to_string())
        }
        Ok(output) => fail_check(
            "git is callable",
            format!(
                "git returned exit code {} with output: {}",
                output.status_code,
                output.stderr.trim()
            ),
        ),
        Err(error) => fail_check(
            "git is callable",
            format!("failed to execute git --version: {error}"),
        ),
    }
}

fn pass_check(name: &str, details: impl Into<String>) -> DoctorCheck {
    DoctorCheck {
        name: name.to_string(),
        state: CheckState::Pass,
        details: details.into(),
    }
}

fn fail_check(name: &str, details: impl Into<String>) -> DoctorCheck {
    DoctorCheck {
        name: name.to_string(),
        state: CheckState::Fail,
        details: details.into(),
    }
}

fn is_executable_in_path(program: &str) -> bool {
    let program_path = Path::new(program);

    if program_path.is_absolute() || program.contains('/') {
        return is_executable_file(program_path);
    }

    let path_value = match env::var_os("PATH") {
        Some(value) => value,
        None => return false,
    };

    env::split_paths(&path_value)
        .map(|directory| directory.join(program))
        .any(|candidate| is_executable_file(&candidate))
}

fn is_executable_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match path.metadata() {
            Ok(metadata) => metadata.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }

    #[cfg(not(unix))]
    {
        true
    }
}
