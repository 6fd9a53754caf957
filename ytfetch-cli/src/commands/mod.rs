//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `fetch`: Expand a destination and download into it
//! - `resolve`: Show where a destination would be written
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod fetch;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use fetch::FetchCommand;
pub use resolve::{ResolveCommand, ResolveFormat};
