//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated environment
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const ISOLATED_VARS: &[&str] = &[
    "MUSIC",
    "VIDEOS",
    "YTFETCH_CONFIG",
    "YTFETCH_DOWNLOADER",
    "YTFETCH_MUSIC_VAR",
    "YTFETCH_VIDEOS_VAR",
    "YTFETCH_NO_MTIME",
    "YTFETCH_EXTRA_ARGS",
    "YTFETCH_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as `HOME` and as the working directory
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running the ytfetch binary inside the
    /// environment.
    ///
    /// `HOME` points at the temporary directory so no user configuration is
    /// read, and the variables ytfetch consults are removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ytfetch").expect("Failed to find ytfetch binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A `fetch --dry-run` command with the given arguments.
    pub fn dry_run(&self, args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.arg("fetch").arg("--dry-run").args(args);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write `contents` to a file in the test environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file (`~/.ytfetch/config.yaml`).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.create_dir(".ytfetch");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }
}

/// Returns the first stdout line, trimmed.
#[allow(dead_code)]
pub fn first_line(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
