//! Destination resolution for download targets.
//!
//! This module provides the `PathResolver` type, which decides the directory
//! a download is written to and strips the extension from the file name so
//! the downloader can append its own.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::{ParentSource, ResolvedPath};

/// Configuration for a [`PathResolver`].
///
/// The preferred parent is chosen by the caller (for instance from `$MUSIC`
/// for audio files); the resolver itself never reads the environment for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Directory used for bare file names, if it exists.
    pub preferred_parent: Option<PathBuf>,
}

impl ResolverConfig {
    /// Create a configuration with the given preferred parent.
    #[must_use]
    pub fn with_preferred_parent(preferred_parent: impl Into<PathBuf>) -> Self {
        Self {
            preferred_parent: Some(preferred_parent.into()),
        }
    }
}

/// Resolves destination paths.
///
/// - A path with a parent component keeps that parent, creating it (and any
///   missing ancestors) when absent.
/// - A bare file name goes into the preferred parent when that directory
///   exists, or into the current working directory otherwise. No
///   directories are created in this case.
///
/// # Examples
///
/// ```no_run
/// use ytfetch::path::{ParentSource, PathResolver, ResolverConfig};
/// use std::path::Path;
///
/// let resolver = PathResolver::new(ResolverConfig::with_preferred_parent("/media/music"));
/// let resolved = resolver.resolve(Path::new("song.mp3")).unwrap();
/// assert_eq!(resolved.source(), ParentSource::Preferred);
/// assert_eq!(resolved.path(), Path::new("/media/music/song"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    config: ResolverConfig,
}

impl PathResolver {
    /// Create a new path resolver.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The resolver's configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `filepath` to its parent directory joined with its stem.
    ///
    /// The returned path is not made absolute; see [`ResolvedPath::absolute`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path has no file name (e.g. it ends in `..`)
    /// - The explicit parent exists but is not a directory
    /// - A missing parent directory cannot be created
    /// - The current directory cannot be determined
    pub fn resolve(&self, filepath: &Path) -> Result<ResolvedPath> {
        let stem = filepath.file_stem().ok_or_else(|| Error::InvalidPath {
            path: filepath.to_path_buf(),
            reason: "Path has no file name".to_string(),
        })?;

        match explicit_parent(filepath) {
            Some(parent) => {
                let created = ensure_directory(parent)?;
                Ok(ResolvedPath::new(
                    parent.to_path_buf(),
                    Path::new(stem),
                    ParentSource::Explicit,
                    created,
                ))
            }
            None => {
                let (parent, source) = self.fallback_parent(filepath)?;
                Ok(ResolvedPath::new(parent, Path::new(stem), source, false))
            }
        }
    }

    /// Pick the directory for a bare file name.
    fn fallback_parent(&self, filepath: &Path) -> Result<(PathBuf, ParentSource)> {
        if let Some(preferred) = &self.config.preferred_parent {
            if preferred.is_dir() {
                return Ok((preferred.clone(), ParentSource::Preferred));
            }
            log::debug!(
                "Preferred directory {} does not exist, using current directory",
                preferred.display()
            );
        }

        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: filepath.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        Ok((cwd, ParentSource::CurrentDir))
    }
}

/// The parent component of `path`, or `None` for a bare file name.
fn explicit_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Create `dir` recursively if missing. Returns whether it was created.
fn ensure_directory(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    if dir.exists() {
        return Err(Error::InvalidPath {
            path: dir.to_path_buf(),
            reason: "Parent exists but is not a directory".to_string(),
        });
    }

    log::debug!("Creating parent directories {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| Error::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_parent_detection() {
        assert_eq!(explicit_parent(Path::new("song.mp3")), None);
        assert_eq!(
            explicit_parent(Path::new("music/song.mp3")),
            Some(Path::new("music"))
        );
        assert_eq!(
            explicit_parent(Path::new("/song.mp3")),
            Some(Path::new("/"))
        );
    }

    #[test]
    fn test_resolve_creates_missing_parent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a/b/c/song.mp3");

        let resolver = PathResolver::default();
        let resolved = resolver.resolve(&target).unwrap();

        assert!(dir.path().join("a/b/c").is_dir());
        assert_eq!(resolved.parent(), dir.path().join("a/b/c"));
        assert_eq!(resolved.path(), dir.path().join("a/b/c/song"));
        assert_eq!(resolved.source(), ParentSource::Explicit);
        assert!(resolved.created_parent());
    }

    #[test]
    fn test_resolve_existing_parent_not_created() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("clip.mkv");

        let resolved = PathResolver::default().resolve(&target).unwrap();

        assert_eq!(resolved.path(), dir.path().join("clip"));
        assert!(!resolved.created_parent());
    }

    #[test]
    fn test_resolve_explicit_parent_ignores_preferred() {
        let dir = tempdir().unwrap();
        let preferred = dir.path().join("preferred");
        fs::create_dir(&preferred).unwrap();
        let target = dir.path().join("elsewhere/song.mp3");

        let resolver = PathResolver::new(ResolverConfig::with_preferred_parent(&preferred));
        let resolved = resolver.resolve(&target).unwrap();

        assert_eq!(resolved.parent(), dir.path().join("elsewhere"));
        assert_eq!(resolved.source(), ParentSource::Explicit);
    }

    #[test]
    fn test_resolve_bare_name_uses_preferred() {
        let dir = tempdir().unwrap();
        let resolver = PathResolver::new(ResolverConfig::with_preferred_parent(dir.path()));

        let resolved = resolver.resolve(Path::new("song.mp3")).unwrap();

        assert_eq!(resolved.parent(), dir.path());
        assert_eq!(resolved.path(), dir.path().join("song"));
        assert_eq!(resolved.source(), ParentSource::Preferred);
    }

    #[test]
    fn test_resolve_bare_name_missing_preferred_uses_cwd() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let resolver = PathResolver::new(ResolverConfig::with_preferred_parent(&missing));

        let resolved = resolver.resolve(Path::new("song.mp3")).unwrap();

        assert_eq!(resolved.parent(), env::current_dir().unwrap());
        assert_eq!(resolved.source(), ParentSource::CurrentDir);
        assert!(!missing.exists());
    }

    #[test]
    fn test_resolve_bare_name_without_preferred_uses_cwd() {
        let resolved = PathResolver::default()
            .resolve(Path::new("clip.webm"))
            .unwrap();

        assert_eq!(resolved.path(), env::current_dir().unwrap().join("clip"));
        assert_eq!(resolved.source(), ParentSource::CurrentDir);
    }

    #[test]
    fn test_resolve_strips_only_final_extension() {
        let dir = tempdir().unwrap();
        let resolver = PathResolver::new(ResolverConfig::with_preferred_parent(dir.path()));

        let resolved = resolver.resolve(Path::new("live.2019.mp4")).unwrap();

        assert_eq!(resolved.path(), dir.path().join("live.2019"));
    }

    #[test]
    fn test_resolve_parent_is_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, b"").unwrap();

        let result = PathResolver::default().resolve(&file.join("song.mp3"));

        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_resolve_no_file_name() {
        let result = PathResolver::default().resolve(Path::new("music/.."));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_create_failure_is_surfaced() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

        let result = PathResolver::default().resolve(&locked.join("sub/song.mp3"));

        // Restore so the tempdir can be cleaned up
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();

        // Root ignores directory permissions, so only assert when creation failed
        if !locked.join("sub").exists() {
            assert!(matches!(result, Err(Error::CreateDirectory { .. })));
        }
    }
}
