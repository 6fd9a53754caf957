//! Path normalization functions.
//!
//! This module provides purely lexical normalization: redundant separators
//! and `.`/`..` components are collapsed without touching the filesystem,
//! so it works for destinations that do not exist yet.

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Collapse redundant separators and `.`/`..` components syntactically.
///
/// Rules:
/// - `.` components are removed (a path that reduces to nothing becomes `.`)
/// - `name/..` pairs cancel out
/// - `..` directly after the root is dropped (`/..` is `/`)
/// - leading `..` of a relative path are preserved
/// - a path naming a directory (trailing separator, `.` or `..`) keeps its
///   trailing separator unless it ends in a preserved `..`
/// - an empty input stays empty
///
/// # Examples
///
/// ```
/// use ytfetch::path::normalize::{names_directory, normalize_lexically};
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     normalize_lexically(Path::new("/users//alice/./music/../videos")),
///     PathBuf::from("/users/alice/videos")
/// );
/// assert_eq!(normalize_lexically(Path::new("../a/../b")), PathBuf::from("../b"));
/// assert_eq!(normalize_lexically(Path::new("a/..")), PathBuf::from("."));
/// assert!(names_directory(&normalize_lexically(Path::new("music/./song.mp3/"))));
/// ```
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }

    let mut prefix: Option<OsString> = None;
    let mut has_root = false;
    let mut parts: Vec<OsString> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = Some(p.as_os_str().to_os_string()),
            Component::RootDir => has_root = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last != ".." => {
                    parts.pop();
                }
                // `..` above the root is the root itself
                None if has_root => {}
                _ => parts.push(OsString::from("..")),
            },
            Component::Normal(name) => parts.push(name.to_os_string()),
        }
    }

    let mut result = PathBuf::new();
    if let Some(prefix) = prefix {
        result.push(prefix);
    }
    if has_root {
        result.push(Component::RootDir);
    }
    let keep_separator =
        names_directory(path) && parts.last().is_some_and(|last| last != "..");
    for part in parts {
        result.push(part);
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    } else if keep_separator {
        // pushing an empty component appends a separator
        result.push("");
    }
    result
}

/// Whether `path` syntactically names a directory: it ends with a
/// separator, or its last component is `.` or `..`.
///
/// [`Path::components`] forgets both, so the raw text is inspected.
///
/// # Examples
///
/// ```
/// use ytfetch::path::normalize::names_directory;
/// use std::path::Path;
///
/// assert!(names_directory(Path::new("music/song.mp3/")));
/// assert!(names_directory(Path::new("music/..")));
/// assert!(!names_directory(Path::new("music/song.mp3")));
/// ```
#[must_use]
pub fn names_directory(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    let is_separator = |b: &u8| std::path::is_separator(char::from(*b));

    match bytes.last() {
        None => false,
        Some(last) if is_separator(last) => true,
        Some(_) => {
            let last_name = bytes.rsplit(is_separator).next().unwrap_or_default();
            last_name == b"." || last_name == b".."
        }
    }
}

/// Make a path absolute against the current working directory and
/// normalize it lexically.
///
/// Absolute paths are only normalized. Symlinks are never followed.
///
/// # Errors
///
/// Returns an error if the path is relative and the current directory
/// cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use ytfetch::path::normalize::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("music/../videos/clip")).unwrap();
/// assert!(absolute.is_absolute());
/// assert!(absolute.ends_with("videos/clip"));
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_lexically(path));
    }

    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    Ok(normalize_lexically(&cwd.join(path)))
}
