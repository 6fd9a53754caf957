//! Integration tests for the ytfetch CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, version output and completions.

use assert_cmd::Command;
use predicates::prelude::*;

fn ytfetch() -> Command {
    Command::cargo_bin("ytfetch").expect("Failed to find ytfetch binary")
}

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    // With clap subcommands required, no arguments should fail and show usage
    ytfetch()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    ytfetch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ytfetch"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that help lists every subcommand and global option.
#[test]
fn test_cli_help_lists_commands() {
    ytfetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--config"));
}

/// Test that fetch help documents its flags.
#[test]
fn test_fetch_help() {
    ytfetch()
        .args(["fetch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("FILEPATH"));
}

/// Test that completion scripts are generated for the installed binary name.
#[test]
fn test_completions_bash() {
    ytfetch()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ytfetch"))
        .stderr(predicate::str::contains("bash completion script"));
}

/// Test that --quiet drops the installation hint.
#[test]
fn test_completions_quiet() {
    ytfetch()
        .args(["--quiet", "completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not())
        .stderr(predicate::str::is_empty());
}

/// Test that an unknown shell is rejected by argument parsing.
#[test]
fn test_completions_unknown_shell() {
    ytfetch()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
