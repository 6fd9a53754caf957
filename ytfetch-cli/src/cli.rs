//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, FetchCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for downloading audio and video into expanded paths.
#[derive(Parser)]
#[command(name = "ytfetch")]
#[command(version, about = "Download media into expanded destination paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file as well
    #[arg(long, value_name = "PATH", global = true, env = "YTFETCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Download a video or its audio into a file path
    Fetch(FetchCommand),

    /// Expand and resolve a file path without downloading
    Resolve(ResolveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
