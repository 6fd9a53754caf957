//! Library exports for ytfetch-cli.
//!
//! This module exports the CLI structure so that documentation such as
//! man pages and completion scripts can be generated from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
