//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! ytfetch library without touching the real environment or terminal.

use std::collections::HashMap;

use ytfetch::{Console, Expander};

/// Scripted console: `input` is what the user types, output is captured.
pub type ScriptedConsole = Console<&'static [u8], Vec<u8>>;

/// Builds a variable map from `(name, value)` pairs.
#[allow(dead_code)]
pub fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Creates an expander over `pairs` whose user answers are `input`.
#[allow(dead_code)]
pub fn scripted_expander(
    pairs: &[(&str, &str)],
    input: &'static str,
) -> Expander<HashMap<String, String>, ScriptedConsole> {
    Expander::new(vars(pairs), Console::new(input.as_bytes(), Vec::new()))
}

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}
