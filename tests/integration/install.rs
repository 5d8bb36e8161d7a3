//! Tests for `venv-mgr install`

use super::common::{stderr_of, TestContext};

#[test]
fn install_unknown_env_fails_with_fixed_message() {
    let ctx = TestContext::new();

    let output = ctx
        .cmd()
        .args(["install", "-e", "ghost", "six"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Virtual env named `ghost` does not exist."));
}

#[test]
fn install_without_packages_or_manifest_fails() {
    let ctx = TestContext::new();
    ctx.fake_env("myenv");

    let output = ctx
        .cmd()
        .args(["install", "-e", "myenv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Unable to locate a requirements file."));
}

#[test]
fn install_without_active_env_fails() {
    let ctx = TestContext::new();

    let output = ctx.cmd().args(["install", "six"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("No virtual env is active"));
}
