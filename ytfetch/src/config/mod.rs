//! Configuration system for ytfetch.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file (`~/.ytfetch/config.yaml`)
//! - An explicit configuration file (`--config` / `YTFETCH_CONFIG`)
//! - Environment variable overrides (`YTFETCH_*`)
//! - Programmatic configuration via the builder
//!
//! # Configuration Precedence
//!
//! From highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (YTFETCH_*)
//! 3. Explicit configuration file
//! 4. User configuration file
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use ytfetch::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         downloader: Some("yt-dlp".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.downloader(), "yt-dlp");
//! ```

pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

use std::path::PathBuf;

use crate::error::Result;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_DOWNLOADER};
pub use validator::ConfigValidator;

/// Builds the effective configuration from all sources.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also load `path`, which must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `YTFETCH_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment override
    /// is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            ConfigMerger::merge(ConfigLoader::load_all(self.file.as_deref())?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        log::debug!("Effective configuration: {config:?}");
        Ok(config)
    }
}
