//! Integration tests for error handling and exit codes.
//!
//! These tests verify that ytfetch returns appropriate exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Aborted or declined by the user
//! - Exit code 4: Unusable destination
//! - Exit code 5: I/O error
//! - Exit code 6: Downloader failure
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "song.mp3"])
        .write_stdin("")
        .assert()
        .code(0);
}

// ============================================================================
// User Aborts (Exit Code 1)
// ============================================================================

#[test]
fn test_closed_input_exits_with_one() {
    let env = TestEnv::new();

    env.command()
        .args(["fetch", "--dry-run"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input closed while waiting for Enter filepath"));
}

#[test]
fn test_closed_input_at_menu_exits_with_one() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "${YTFETCH_TEST_UNSET}/song.mp3"])
        .write_stdin("")
        .assert()
        .code(1);
}

// ============================================================================
// Invalid Destinations (Exit Code 4)
// ============================================================================

#[test]
fn test_missing_extension_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "music/song"])
        .write_stdin("")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("missing file extension"));

    assert!(!env.path().join("music").exists());
}

#[test]
fn test_directory_destination_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["fetch", "--dry-run", "music/song.mp3/", "youtu.be/abc"])
        .write_stdin("")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("youtube-dl").not())
        .stderr(predicate::str::contains("missing file extension"));

    assert!(!env.path().join("music").exists());
}

#[test]
fn test_unsupported_format_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["fetch", "--dry-run", "notes.txt", "youtu.be/abc"])
        .write_stdin("")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid file format: txt"));
}

#[test]
fn test_extension_is_case_sensitive() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "song.MP3"])
        .write_stdin("")
        .assert()
        .code(4);
}

// ============================================================================
// I/O Errors (Exit Code 5)
// ============================================================================

#[test]
fn test_uncreatable_directory_exit_code() {
    let env = TestEnv::new();
    env.write_file("blocker", "");

    env.command()
        .args(["resolve", "blocker/inner/song.mp3"])
        .write_stdin("")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("cannot create directory"));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

#[test]
fn test_missing_config_file_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["--config", "does-not-exist.yaml", "resolve", "song.mp3"])
        .write_stdin("")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_from_environment_variable() {
    let env = TestEnv::new();

    env.command()
        .env("YTFETCH_CONFIG", env.path().join("absent.yaml"))
        .args(["resolve", "song.mp3"])
        .write_stdin("")
        .assert()
        .code(7);
}

#[test]
fn test_unknown_config_field_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("port: 8080\n");

    env.command()
        .args(["resolve", "song.mp3"])
        .write_stdin("")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Invalid YAML"));
}

#[test]
fn test_invalid_environment_override_exit_code() {
    let env = TestEnv::new();

    env.command()
        .env("YTFETCH_NO_MTIME", "sometimes")
        .args(["resolve", "song.mp3"])
        .write_stdin("")
        .assert()
        .code(7);
}

#[test]
fn test_blank_downloader_exit_code() {
    let env = TestEnv::new();
    env.write_user_config("downloader: \"  \"\n");

    env.command()
        .args(["resolve", "song.mp3"])
        .write_stdin("")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("downloader"));
}

// ============================================================================
// Usage Errors
// ============================================================================

#[test]
fn test_unknown_subcommand() {
    let env = TestEnv::new();

    env.command()
        .arg("reserve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
