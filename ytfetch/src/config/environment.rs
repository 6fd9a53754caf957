//! Environment variable handling for configuration overrides.
//!
//! This module provides support for YTFETCH_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use ytfetch::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `YTFETCH_DOWNLOADER`, `YTFETCH_MUSIC_VAR`, `YTFETCH_VIDEOS_VAR`,
    /// `YTFETCH_NO_MTIME` and `YTFETCH_EXTRA_ARGS` (whitespace-separated,
    /// appended to any configured arguments).
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable has an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(downloader) = env::var("YTFETCH_DOWNLOADER") {
            config.downloader = Some(downloader);
        }

        if let Ok(name) = env::var("YTFETCH_MUSIC_VAR") {
            config.music_var = Some(name);
        }

        if let Ok(name) = env::var("YTFETCH_VIDEOS_VAR") {
            config.videos_var = Some(name);
        }

        if let Ok(val) = env::var("YTFETCH_NO_MTIME") {
            config.no_mtime = Some(Self::parse_bool("YTFETCH_NO_MTIME", &val)?);
        }

        if let Ok(args) = env::var("YTFETCH_EXTRA_ARGS") {
            config
                .extra_args
                .get_or_insert_with(Vec::new)
                .extend(args.split_whitespace().map(String::from));
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
