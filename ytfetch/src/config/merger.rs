//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use ytfetch::config::{Config, ConfigMerger};
///
/// let low = Config { downloader: Some("youtube-dl".to_string()), ..Default::default() };
/// let high = Config { downloader: Some("yt-dlp".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.downloader(), "yt-dlp");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced when set in `source`; `extra_args` lists are
    /// accumulated, lower-precedence arguments first.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.downloader.is_some() {
            target.downloader.clone_from(&source.downloader);
        }
        if source.music_var.is_some() {
            target.music_var.clone_from(&source.music_var);
        }
        if source.videos_var.is_some() {
            target.videos_var.clone_from(&source.videos_var);
        }
        if source.no_mtime.is_some() {
            target.no_mtime = source.no_mtime;
        }
        if let Some(extra) = &source.extra_args {
            target
                .extra_args
                .get_or_insert_with(Vec::new)
                .extend(extra.iter().cloned());
        }
    }
}
