//! Tests for `venv-mgr env` subcommands

use super::common::{stderr_of, stdout_of, TestContext};

#[test]
fn env_list_starts_empty() {
    let ctx = TestContext::new();

    let output = ctx.cmd().args(["env", "list"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("No virtual envs found"));
}

#[test]
fn env_locate_unknown_fails_with_fixed_message() {
    let ctx = TestContext::new();

    let output = ctx.cmd().args(["env", "locate", "ghost"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Virtual env named `ghost` does not exist."));
}

#[test]
fn env_locate_prints_path() {
    let ctx = TestContext::new();
    let env_path = ctx.fake_env("myenv");

    let output = ctx.cmd().args(["env", "locate", "myenv"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains(&env_path.display().to_string()));
}

#[test]
fn env_remove_unknown_fails_with_fixed_message() {
    let ctx = TestContext::new();

    let output = ctx
        .cmd()
        .args(["env", "remove", "-y", "ghost"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Virtual env named `ghost` does not exist."));
}

#[test]
fn env_remove_deletes_the_env() {
    let ctx = TestContext::new();
    let env_path = ctx.fake_env("myenv");

    let output = ctx
        .cmd()
        .args(["env", "remove", "-y", "myenv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!env_path.exists());
}

#[test]
fn env_new_rejects_bad_names() {
    let ctx = TestContext::new();

    let output = ctx
        .cmd()
        .args(["env", "new", "bad/name"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid env name"));
}

#[test]
fn env_new_rejects_existing_name() {
    let ctx = TestContext::new();
    ctx.fake_env("taken");

    let output = ctx.cmd().args(["env", "new", "taken"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Virtual env named `taken` already exists."));
}

#[test]
fn env_list_shows_created_envs() {
    let ctx = TestContext::new();
    ctx.fake_env("beta");
    ctx.fake_env("alpha");

    let output = ctx.cmd().args(["env", "list"]).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    let alpha = stdout.find("alpha").expect("alpha listed");
    let beta = stdout.find("beta").expect("beta listed");
    assert!(alpha < beta);
}

#[test]
fn env_new_creates_a_working_env() {
    if !TestContext::has_python() {
        eprintln!("skipping: python3 not available");
        return;
    }

    let ctx = TestContext::new();

    let output = ctx.cmd().args(["env", "new", "real"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let output = ctx.cmd().args(["env", "list"]).output().unwrap();
    assert!(stdout_of(&output).contains("real"));

    // A freshly created env answers package queries.
    let output = ctx.cmd().args(["list", "-e", "real"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}
