//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and destination preparation.

use crate::error::CliError;
use std::env;
use std::path::PathBuf;
use ytfetch::{
    Config, ConfigBuilder, Error as LibError, Expander, Logger, MediaFile, PathResolver,
    ProcessEnv, Prompter, ResolvedPath, ResolverConfig,
};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Logger configured from the flags above.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (`YTFETCH_*`)
/// 2. The file given with `--config`
/// 3. `~/.ytfetch/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_file(path);
    }

    builder.build().map_err(|e| match e {
        LibError::Io(io) => CliError::Io(io),
        other => CliError::Config(other.to_string()),
    })
}

/// A destination ready for downloading.
#[derive(Debug)]
pub struct Destination {
    /// The expanded file path, extension included.
    pub file: MediaFile,

    /// Where the file goes, extension stripped.
    pub resolved: ResolvedPath,

    /// The resolved path made absolute.
    pub absolute: PathBuf,
}

impl Destination {
    /// The absolute path with the extension restored.
    pub fn display_path(&self) -> String {
        format!("{}.{}", self.absolute.display(), self.file.extension())
    }
}

/// Expand, validate and resolve a destination file path.
///
/// Undefined variables in `text` are resolved through `prompter`. Bare file
/// names are placed in the directory named by the environment variable that
/// the configuration associates with the file's media category.
pub fn prepare_destination<P: Prompter>(
    text: &str,
    prompter: P,
    config: &Config,
    logger: Logger,
) -> Result<Destination, CliError> {
    let expanded = Expander::new(ProcessEnv, prompter)
        .with_logger(logger)
        .expand(text)?;
    logger.debug(&format!("Expanded '{text}' to '{}'", expanded.display()));

    let file = MediaFile::from_path(&expanded)?;

    let var = config.directory_var(file.category());
    let resolver_config = match env::var_os(var) {
        Some(dir) if !dir.is_empty() => ResolverConfig::with_preferred_parent(dir),
        _ => {
            logger.debug(&format!("${var} is not set"));
            ResolverConfig::default()
        }
    };

    let resolved = PathResolver::new(resolver_config).resolve(&expanded)?;
    if resolved.created_parent() {
        logger.info(&format!("Created directory {}", resolved.parent().display()));
    }
    logger.debug(&format!(
        "Using {} directory {}",
        resolved.source(),
        resolved.parent().display()
    ));

    let absolute = resolved.absolute()?;
    Ok(Destination {
        file,
        resolved,
        absolute,
    })
}
