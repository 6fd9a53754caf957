//! Media classification by file extension.
//!
//! The extension of the destination decides everything about a download:
//! whether audio is extracted or video recoded, which quality selector is
//! passed to the downloader, and which environment variable names the
//! default directory for bare file names.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::normalize::names_directory;

/// Extensions downloaded as extracted audio.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "aac", "m4a", "opus", "vorbis", "wav"];

/// Extensions downloaded as recoded video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "flv", "ogg", "webm", "mkv", "avi"];

/// Broad kind of media a destination holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// Audio only.
    Audio,
    /// Video with audio.
    Video,
}

impl MediaCategory {
    /// Classify an extension (without the dot). Matching is case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytfetch::media::MediaCategory;
    ///
    /// assert_eq!(MediaCategory::from_extension("opus"), Some(MediaCategory::Audio));
    /// assert_eq!(MediaCategory::from_extension("mkv"), Some(MediaCategory::Video));
    /// assert_eq!(MediaCategory::from_extension("txt"), None);
    /// ```
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        if AUDIO_EXTENSIONS.contains(&extension) {
            Some(Self::Audio)
        } else if VIDEO_EXTENSIONS.contains(&extension) {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Default environment variable naming the directory for this category.
    #[must_use]
    pub const fn default_directory_var(&self) -> &'static str {
        match self {
            Self::Audio => "MUSIC",
            Self::Video => "VIDEOS",
        }
    }

    /// Format selector handed to the downloader's `-f` option.
    #[must_use]
    pub const fn quality(&self) -> &'static str {
        match self {
            Self::Audio => "bestaudio",
            Self::Video => "bestvideo+bestaudio",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// A destination path that has been checked to carry a supported extension.
///
/// # Examples
///
/// ```
/// use ytfetch::media::{MediaCategory, MediaFile};
/// use std::path::Path;
///
/// let file = MediaFile::from_path(Path::new("live/set.flac")).unwrap();
/// assert_eq!(file.category(), MediaCategory::Audio);
/// assert_eq!(file.extension(), "flac");
/// assert_eq!(file.recode_args(), ["-x", "--audio-format", "flac"]);
///
/// assert!(MediaFile::from_path(Path::new("notes.txt")).is_err());
/// assert!(MediaFile::from_path(Path::new("no-extension")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    path: PathBuf,
    extension: String,
    category: MediaCategory,
}

impl MediaFile {
    /// Validate `path` and classify it by extension.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::MissingExtension`] if the file name has no (or an empty)
    ///   extension, or the path names a directory (`music/song.mp3/`)
    /// - [`Error::InvalidPath`] if the extension is not valid UTF-8
    /// - [`Error::UnsupportedFormat`] if the extension is not a known audio
    ///   or video format
    pub fn from_path(path: &Path) -> Result<Self> {
        // `song.mp3/` names a directory, whatever its last component says
        let extension = Some(path)
            .filter(|path| !names_directory(path))
            .and_then(|path| path.extension())
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| Error::MissingExtension {
                path: path.to_path_buf(),
            })?;
        let extension = extension.to_str().ok_or_else(|| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Extension contains invalid UTF-8".to_string(),
        })?;
        let category =
            MediaCategory::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
                extension: extension.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            extension: extension.to_string(),
            category,
        })
    }

    /// The destination as given.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The extension without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The media category implied by the extension.
    #[must_use]
    pub const fn category(&self) -> MediaCategory {
        self.category
    }

    /// Downloader arguments converting the download to this file's format.
    #[must_use]
    pub fn recode_args(&self) -> Vec<String> {
        match self.category {
            MediaCategory::Audio => vec![
                "-x".to_string(),
                "--audio-format".to_string(),
                self.extension.clone(),
            ],
            MediaCategory::Video => vec!["--recode-video".to_string(), self.extension.clone()],
        }
    }
}
