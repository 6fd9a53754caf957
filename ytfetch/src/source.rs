//! Media source references.
//!
//! A source is either a video URL the downloader understands directly or a
//! free-text search that the downloader resolves to its first result.

use std::fmt;

use serde::Serialize;

/// Hosts accepted as direct video URLs.
const SUPPORTED_HOSTS: &[&str] = &["www.youtube.com", "youtu.be", "youtube"];

/// What the downloader should fetch.
///
/// # Examples
///
/// ```
/// use ytfetch::source::MediaSource;
///
/// let url = MediaSource::parse("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert_eq!(url.to_string(), "https://youtu.be/dQw4w9WgXcQ");
///
/// let search = MediaSource::search("lofi hip hop");
/// assert_eq!(search.to_string(), "ytsearch:lofi hip hop");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MediaSource {
    /// A direct URL.
    Url(String),
    /// A search term.
    Search(String),
}

impl MediaSource {
    /// Accept `text` as a URL source if it looks like a supported video URL.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        is_supported_url(text).then(|| Self::Url(text.to_string()))
    }

    /// A search for `term`.
    #[must_use]
    pub fn search(term: &str) -> Self {
        Self::Search(term.to_string())
    }

    /// Returns true for search sources.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(self, Self::Search(_))
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Search(term) => write!(f, "ytsearch:{term}"),
        }
    }
}

/// Whether `text` looks like a supported video URL.
///
/// The scheme is optional (`http://` or `https://`), the host must be one of
/// `www.youtube.com`, `youtu.be` or `youtube`, and something must follow
/// the slash after the host. The URL is not checked for reachability.
///
/// # Examples
///
/// ```
/// use ytfetch::source::is_supported_url;
///
/// assert!(is_supported_url("https://www.youtube.com/watch?v=abc"));
/// assert!(is_supported_url("youtu.be/abc"));
/// assert!(!is_supported_url("https://youtube.com/watch?v=abc"));
/// assert!(!is_supported_url("https://youtu.be/"));
/// ```
#[must_use]
pub fn is_supported_url(text: &str) -> bool {
    let rest = text
        .strip_prefix("https://")
        .or_else(|| text.strip_prefix("http://"))
        .unwrap_or(text);

    SUPPORTED_HOSTS.iter().any(|host| {
        rest.strip_prefix(host)
            .and_then(|after_host| after_host.strip_prefix('/'))
            .is_some_and(|path| !path.is_empty() && !path.contains(['\n', '\r']))
    })
}
