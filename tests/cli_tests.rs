//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Points the client at a closed local port so any network attempt fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn git_seer(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("git-seer"));
    cmd.current_dir(workdir.path())
        .env("GIT_SEER_API_BASE_URL", UNREACHABLE_API)
        .env("GIT_SEER_TIMEOUT_SECS", "2");
    cmd
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    git_seer(&tmp).arg("--version").assert().success().stdout(predicate::str::contains("git-seer"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    git_seer(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("without cloning"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_report_rejects_repo_without_separator() {
    let tmp = TempDir::new().expect("tmp");
    git_seer(&tmp)
        .args(["report", "notarepo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid repository format"))
        .stderr(predicate::str::contains("Could not retrieve").not());
}

#[test]
fn test_report_rejects_repo_with_extra_separator() {
    let tmp = TempDir::new().expect("tmp");
    git_seer(&tmp)
        .args(["report", "a/b/c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid repository format"));
}

#[test]
fn test_report_fails_when_data_unavailable() {
    let tmp = TempDir::new().expect("tmp");
    git_seer(&tmp)
        .args(["report", "octo/demo"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not retrieve data for octo/demo"));
}

#[test]
fn test_report_requires_repo_argument() {
    let tmp = TempDir::new().expect("tmp");
    git_seer(&tmp).arg("report").assert().failure();
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let tmp = TempDir::new().expect("tmp");
    git_seer(&tmp)
        .args(["--config", "missing.toml", "report", "octo/demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_discovered_config_fallback_branch_is_reported() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("git-seer.toml"), "fallback_branch = 'trunk'\n").expect("write");
    git_seer(&tmp)
        .args(["report", "octo/demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'main' or 'trunk'"));
}
