mod support;

use std::fs;

use gitdeck_app::{App, BootstrapOutcome, ScriptedPromptResponse};

use support::{Fixture, ok};

fn input(value: &str) -> ScriptedPromptResponse {
    ScriptedPromptResponse::input(value)
}

#[test]
fn clone_into_non_empty_directory_clears_what_it_can_and_still_clones() {
    let temp = tempfile::tempdir().expect("temp dir");
    let target = temp.path().join("target");
    fs::create_dir_all(target.join("keep")).expect("subdir");
    fs::write(target.join("a.txt"), "a").expect("file a");
    fs::write(target.join("b.txt"), "b").expect("file b");
    fs::write(target.join("keep").join("inner.txt"), "inner").expect("inner file");

    let mut fixture = Fixture::in_repo(
        &target,
        vec![ok("Cloning into '.'...\n")],
        vec![
            input("2"),
            input("https://example.com/repo.git"),
            ScriptedPromptResponse::Confirm(true),
        ],
        Vec::new(),
    );

    let outcome = fixture.run(|app, session| app.bootstrap(session));

    assert_eq!(outcome, BootstrapOutcome::Cloned);
    assert!(!target.join("a.txt").exists());
    assert!(!target.join("b.txt").exists());
    assert!(target.join("keep").join("inner.txt").exists());
    let errors = fixture.console.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Could not remove"));
    assert!(errors[0].contains("keep"));
    assert_eq!(
        fixture.runner.lines(),
        ["clone https://example.com/repo.git ."]
    );
    assert_eq!(fixture.runner.calls()[0].cwd.as_deref(), Some(target.as_path()));
}

#[test]
fn declining_the_overwrite_returns_to_the_choices() {
    let temp = tempfile::tempdir().expect("temp dir");
    fs::write(temp.path().join("notes.txt"), "keep me").expect("file");

    let mut fixture = Fixture::in_repo(
        temp.path(),
        Vec::new(),
        vec![
            input("2"),
            input("https://example.com/repo.git"),
            ScriptedPromptResponse::Confirm(false),
            input("3"),
        ],
        Vec::new(),
    );

    let outcome = fixture.run(|app, session| app.bootstrap(session));

    assert_eq!(outcome, BootstrapOutcome::Skipped);
    assert!(temp.path().join("notes.txt").exists());
    assert!(fixture.runner.calls().is_empty());
}

#[test]
fn empty_clone_url_returns_to_the_choices() {
    let temp = tempfile::tempdir().expect("temp dir");
    let mut fixture = Fixture::in_repo(
        temp.path(),
        Vec::new(),
        vec![input("2"), input(""), input("3")],
        Vec::new(),
    );

    let outcome = fixture.run(|app, session| app.bootstrap(session));

    assert_eq!(outcome, BootstrapOutcome::Skipped);
    assert!(fixture.runner.calls().is_empty());
}

#[test]
fn clone_into_empty_directory_needs_no_confirmation() {
    let temp = tempfile::tempdir().expect("temp dir");
    let mut fixture = Fixture::in_repo(
        temp.path(),
        vec![ok("")],
        vec![input("2"), input("https://example.com/repo.git")],
        Vec::new(),
    );

    let outcome = fixture.run(|app, session| app.bootstrap(session));

    assert_eq!(outcome, BootstrapOutcome::Cloned);
    assert_eq!(fixture.prompt.remaining(), 0);
}

#[test]
fn invalid_bootstrap_choice_reprompts() {
    let temp = tempfile::tempdir().expect("temp dir");
    let mut fixture = Fixture::in_repo(
        temp.path(),
        vec![ok("Initialized empty Git repository\n")],
        vec![input("9"), input("1")],
        Vec::new(),
    );

    let outcome = fixture.run(|app, session| app.bootstrap(session));

    assert_eq!(outcome, BootstrapOutcome::Initialized);
    assert!(fixture.console.said("'9' is not a valid choice"));
    assert_eq!(fixture.runner.lines(), ["init"]);
}

#[test]
fn bootstrap_creates_a_missing_target_directory() {
    let temp = tempfile::tempdir().expect("temp dir");
    let target = temp.path().join("nested").join("repo");
    let mut fixture = Fixture::in_repo(&target, Vec::new(), vec![input("3")], Vec::new());

    let outcome = fixture.run(|app, session| app.bootstrap(session));

    assert_eq!(outcome, BootstrapOutcome::Skipped);
    assert!(target.is_dir());
}

#[test]
fn menu_reports_outcomes_and_keeps_looping_until_exit() {
    let mut fixture = Fixture::new(
        vec![ok("")],
        vec![input("8"), input("1"), input("0")],
        Vec::new(),
    );

    fixture.run(|app, session| app.run_menu(session));

    assert!(fixture.console.said("'8' is not a valid option"));
    assert!(
        fixture
            .console
            .errors()
            .contains(&"Operation aborted: nothing to commit, working tree clean.".to_string())
    );
    assert!(fixture.console.said("Bye."));
    assert_eq!(fixture.runner.lines(), ["status --porcelain"]);
}

#[test]
fn menu_lists_every_operation() {
    let mut fixture = Fixture::new(Vec::new(), vec![input("0")], Vec::new());

    fixture.run(|app, session| app.run_menu(session));

    let infos = fixture.console.infos();
    for expected in ["1. Commit and push", "6. Switch branch", "7. Push", "0. Exit"] {
        assert!(
            infos.iter().any(|line| line.contains(expected)),
            "missing {expected}"
        );
    }
}

#[test]
fn session_path_is_required_before_bootstrap() {
    let temp = tempfile::tempdir().expect("temp dir");
    let repo = temp.path().join("repo");
    let mut fixture = Fixture::new(
        Vec::new(),
        vec![
            input(""),
            input(&repo.to_string_lossy()),
            input("3"),
            input("0"),
        ],
        Vec::new(),
    );

    fixture.run(|app, _| app.run_session(None));

    assert!(fixture.console.said("A path is required."));
    assert!(fixture.console.said(&repo.display().to_string()));
    assert!(repo.is_dir());
}

#[test]
fn preset_path_skips_the_path_prompt() {
    let temp = tempfile::tempdir().expect("temp dir");
    let mut fixture = Fixture::new(Vec::new(), vec![input("3"), input("0")], Vec::new());

    fixture.run(|app, _| app.run_session(Some(temp.path())));

    assert_eq!(fixture.prompt.asked().len(), 2);
    assert!(fixture.console.said(&temp.path().display().to_string()));
}

#[test]
fn prompt_failure_ends_the_session_with_an_error() {
    let mut fixture = Fixture::new(Vec::new(), Vec::new(), Vec::new());

    let result = {
        let mut app = App::new(
            &fixture.runner,
            &fixture.console,
            &mut fixture.prompt,
            &mut fixture.selector,
            &fixture.config,
        );
        app.run_menu(&fixture.session)
    };

    assert!(result.is_err());
}
