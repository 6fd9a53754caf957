#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # ytfetch
//!
//! A library for preparing media downloads.
//!
//! This library turns a destination such as `${MUSIC}/live/set.flac` into a
//! concrete, existing directory and an extension-less target path, decides
//! how the requested format maps onto downloader options, and builds the
//! downloader invocation.
//!
//! ## Core Types
//!
//! - [`Expander`]: `${NAME}` substitution with interactive fallback
//! - [`PathResolver`] and [`ResolvedPath`]: destination directory selection
//! - [`MediaFile`] and [`MediaSource`]: what to produce and where it comes from
//! - [`DownloadCommand`]: the downloader invocation
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::collections::HashMap;
//! use std::path::PathBuf;
//! use ytfetch::{Console, Expander, MediaCategory, MediaFile};
//!
//! let vars = HashMap::from([("HOME".to_string(), "/users/alice".to_string())]);
//! let mut expander = Expander::new(vars, Console::new("".as_bytes(), Vec::new()));
//!
//! let path = expander.expand("${HOME}/music/./song.mp3").unwrap();
//! assert_eq!(path, PathBuf::from("/users/alice/music/song.mp3"));
//!
//! let file = MediaFile::from_path(&path).unwrap();
//! assert_eq!(file.category(), MediaCategory::Audio);
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod expand;
pub mod logging;
pub mod media;
pub mod path;
pub mod source;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use download::DownloadCommand;
pub use error::{Error, Result};
pub use expand::{Console, Expander, MenuChoice, ProcessEnv, Prompter, VariableSource};
pub use logging::{init_logger, LogLevel, Logger};
pub use media::{MediaCategory, MediaFile};
pub use path::{ParentSource, PathResolver, ResolvedPath, ResolverConfig};
pub use source::MediaSource;
