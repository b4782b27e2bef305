//! Integration tests for the process exit status of `upload-assets`.
//!
//! These tests run the built binary and only exercise paths that end
//! before any FTP connection is attempted.

use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_upload-assets"))
        .args(args)
        .current_dir(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path())
        .output()
        .expect("failed to run upload-assets")
}

/// Test that a missing key is a usage error with status 1
#[test]
fn test_missing_key_exits_1() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("<BRANCH_KEY>"));
}

/// Test that an empty key is a usage error with status 1
#[test]
fn test_empty_key_exits_1() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir, &["", "--ignore-branch"]);

    assert_eq!(output.status.code(), Some(1));
}

/// Test that help prints usage on stdout and exits 0
#[test]
fn test_help_exits_0() {
    let dir = TempDir::new().unwrap();
    for flag in ["--help", "-h"] {
        let output = run_in(&dir, &[flag]);

        assert_eq!(output.status.code(), Some(0));
        assert!(String::from_utf8_lossy(&output.stdout).contains("--ignore-branch"));
    }
}

/// Test that version output exits 0
#[test]
fn test_version_exits_0() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir, &["--version"]);

    assert_eq!(output.status.code(), Some(0));
}

/// Test that a failed branch query outside a repository exits 1
#[test]
fn test_branch_query_failure_exits_1() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir, &["main"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error getting current branch"));
}
