//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; the accessor methods supply the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::media::MediaCategory;

/// Downloader invoked when none is configured.
pub const DEFAULT_DOWNLOADER: &str = "youtube-dl";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use ytfetch::config::Config;
/// use ytfetch::media::MediaCategory;
///
/// let config = Config {
///     downloader: Some("yt-dlp".to_string()),
///     music_var: Some("XDG_MUSIC_DIR".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.downloader(), "yt-dlp");
/// assert_eq!(config.directory_var(MediaCategory::Audio), "XDG_MUSIC_DIR");
/// assert_eq!(config.directory_var(MediaCategory::Video), "VIDEOS");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Program used to download media.
    pub downloader: Option<String>,

    /// Environment variable naming the default directory for audio files.
    pub music_var: Option<String>,

    /// Environment variable naming the default directory for video files.
    pub videos_var: Option<String>,

    /// Extra arguments appended to every downloader invocation.
    pub extra_args: Option<Vec<String>>,

    /// Pass `--no-mtime` so files get the download time, not the upload time.
    pub no_mtime: Option<bool>,
}

impl Config {
    /// The downloader program.
    #[must_use]
    pub fn downloader(&self) -> &str {
        self.downloader.as_deref().unwrap_or(DEFAULT_DOWNLOADER)
    }

    /// The environment variable holding the preferred directory for `category`.
    #[must_use]
    pub fn directory_var(&self, category: MediaCategory) -> &str {
        let configured = match category {
            MediaCategory::Audio => self.music_var.as_deref(),
            MediaCategory::Video => self.videos_var.as_deref(),
        };
        configured.unwrap_or_else(|| category.default_directory_var())
    }

    /// Extra downloader arguments.
    #[must_use]
    pub fn extra_args(&self) -> &[String] {
        self.extra_args.as_deref().unwrap_or_default()
    }

    /// Whether to pass `--no-mtime`. Defaults to true.
    #[must_use]
    pub fn no_mtime(&self) -> bool {
        self.no_mtime.unwrap_or(true)
    }
}
