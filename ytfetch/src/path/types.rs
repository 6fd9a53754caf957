//! Core types for destination path resolution.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::path::normalize;

/// Where the parent directory of a resolved destination came from.
///
/// # Examples
///
/// ```
/// use ytfetch::path::ParentSource;
///
/// assert_eq!(ParentSource::Preferred.to_string(), "preferred");
/// assert!(ParentSource::Explicit.is_explicit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParentSource {
    /// The input path named its own parent directory.
    Explicit,
    /// The input was a bare file name and the preferred directory existed.
    Preferred,
    /// The input was a bare file name and no usable preferred directory
    /// was configured.
    CurrentDir,
}

impl ParentSource {
    /// Returns true if the parent was given as part of the input path.
    #[must_use]
    pub const fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit)
    }
}

impl fmt::Display for ParentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit"),
            Self::Preferred => write!(f, "preferred"),
            Self::CurrentDir => write!(f, "current-dir"),
        }
    }
}

/// A destination path with its extension stripped and its parent directory
/// guaranteed to exist.
///
/// # Examples
///
/// ```no_run
/// use ytfetch::path::{PathResolver, ResolverConfig};
/// use std::path::Path;
///
/// let resolver = PathResolver::new(ResolverConfig::default());
/// let resolved = resolver.resolve(Path::new("downloads/song.mp3")).unwrap();
/// assert!(resolved.path().ends_with("downloads/song"));
/// assert!(resolved.parent().exists());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
    parent: PathBuf,
    source: ParentSource,
    created_parent: bool,
}

impl ResolvedPath {
    pub(crate) fn new(
        parent: PathBuf,
        stem: &Path,
        source: ParentSource,
        created_parent: bool,
    ) -> Self {
        Self {
            path: parent.join(stem),
            parent,
            source,
            created_parent,
        }
    }

    /// The parent directory joined with the file stem.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory the destination lives in.
    #[must_use]
    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// Where the parent directory came from.
    #[must_use]
    pub const fn source(&self) -> ParentSource {
        self.source
    }

    /// Whether the parent directory was created by the resolver.
    #[must_use]
    pub const fn created_parent(&self) -> bool {
        self.created_parent
    }

    /// Convert to an absolute, lexically normalized path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative and the current directory
    /// cannot be determined.
    pub fn absolute(&self) -> Result<PathBuf> {
        normalize::absolutize(&self.path)
    }

    /// Consume and return the stem path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
