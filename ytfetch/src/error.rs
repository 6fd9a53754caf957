//! Error types for the ytfetch library.
//!
//! This module provides the error hierarchy for every operation in the
//! ytfetch library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a ytfetch error.
///
/// # Examples
///
/// ```
/// use ytfetch::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("song.mp3".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the ytfetch library.
#[derive(Debug, Error)]
pub enum Error {
    /// The user chose to abort while resolving an undefined variable.
    #[error("aborted while resolving undefined variable '{variable}'")]
    Aborted {
        /// The variable that could not be resolved.
        variable: String,
    },

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("input closed while waiting for {prompt}")]
    InputClosed {
        /// What the prompt was asking for.
        prompt: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The destination file name has no extension to infer a format from.
    #[error("invalid filename {}: missing file extension", path.display())]
    MissingExtension {
        /// The path without an extension.
        path: PathBuf,
    },

    /// The destination extension is neither a known audio nor video format.
    #[error("invalid file format: {extension}")]
    UnsupportedFormat {
        /// The unsupported extension (without the leading dot).
        extension: String,
    },

    /// A parent directory could not be created.
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file was requested explicitly but does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The external downloader could not be started.
    #[error("downloader '{program}' not found")]
    DownloaderNotFound {
        /// The program that was looked up.
        program: String,
    },

    /// The external downloader exited unsuccessfully.
    #[error("downloader '{program}' failed{}", exit_suffix(*.code))]
    DownloadFailed {
        /// The program that failed.
        program: String,
        /// The exit code, if the process exited normally.
        code: Option<i32>,
    },
}

/// Describe how a process ended, for error messages.
fn exit_suffix(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Returns true if this error represents an explicit user abort.
    #[must_use]
    pub const fn is_user_abort(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}
