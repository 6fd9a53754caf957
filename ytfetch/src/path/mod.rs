//! Destination path handling.
//!
//! This module turns a user-supplied destination such as `song.mp3` or
//! `~/clips/../talks/keynote.mp4` (after variable expansion) into the
//! extension-less target path handed to the downloader.
//!
//! # Key Concepts
//!
//! ## Lexical normalization
//!
//! [`normalize::normalize_lexically`] collapses redundant separators and
//! `.`/`..` components without consulting the filesystem, so destinations
//! that do not exist yet can be normalized.
//!
//! ## Parent selection
//!
//! The [`PathResolver`] decides which directory the download is written to:
//!
//! - **Explicit** ([`ParentSource::Explicit`]): the path names its own parent.
//!   Missing directories are created eagerly.
//! - **Preferred** ([`ParentSource::Preferred`]): a bare file name goes into
//!   the configured preferred directory when it exists.
//! - **Current directory** ([`ParentSource::CurrentDir`]): the fallback for
//!   bare file names.
//!
//! # Examples
//!
//! ```no_run
//! use ytfetch::path::{PathResolver, ResolverConfig};
//! use std::path::Path;
//!
//! let resolver = PathResolver::new(ResolverConfig::with_preferred_parent("/media/music"));
//! let resolved = resolver.resolve(Path::new("song.mp3")).unwrap();
//! let absolute = resolved.absolute().unwrap();
//! println!("{}.mp3", absolute.display());
//! ```

pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::{PathResolver, ResolverConfig};
pub use types::{ParentSource, ResolvedPath};
