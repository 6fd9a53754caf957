//! Command to show where a download would be written.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_destination, Destination, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::Path;
use ytfetch::{Console, MediaCategory, ParentSource};

/// Output format for the resolved destination.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ResolveFormat {
    /// The absolute path only
    #[default]
    Text,
    /// A JSON object describing the resolution
    Json,
}

/// Expand and resolve a file path without downloading anything.
///
/// Missing parent directories are created, as they would be for `fetch`.
#[derive(Args)]
pub struct ResolveCommand {
    /// Destination file; `${NAME}` placeholders are expanded
    #[arg(value_name = "FILEPATH")]
    pub filepath: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = ResolveFormat::Text)]
    pub format: ResolveFormat,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    input: &'a str,
    path: String,
    directory: &'a Path,
    extension: &'a str,
    category: MediaCategory,
    parent_source: ParentSource,
    created_parent: bool,
}

impl<'a> ResolveReport<'a> {
    fn new(input: &'a str, destination: &'a Destination) -> Self {
        Self {
            input,
            path: destination.display_path(),
            directory: destination.resolved.parent(),
            extension: destination.file.extension(),
            category: destination.file.category(),
            parent_source: destination.resolved.source(),
            created_parent: destination.resolved.created_parent(),
        }
    }
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let destination =
            prepare_destination(&self.filepath, Console::stdio(), &config, global.logger)?;

        match self.format {
            ResolveFormat::Text => println!("{}", destination.display_path()),
            ResolveFormat::Json => {
                let report = ResolveReport::new(&self.filepath, &destination);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Ok(())
    }
}
