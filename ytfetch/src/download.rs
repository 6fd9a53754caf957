//! Downloader invocation.
//!
//! Builds the argument vector for `youtube-dl` (or a compatible program such
//! as `yt-dlp`) and runs it with inherited standard streams. Arguments are
//! passed directly to the process, never through a shell.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::media::MediaFile;
use crate::source::MediaSource;

/// Output template suffix; the downloader substitutes the final extension.
pub const OUTPUT_TEMPLATE_SUFFIX: &str = ".%(ext)s";

/// A fully built downloader invocation.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ytfetch::config::Config;
/// use ytfetch::download::DownloadCommand;
/// use ytfetch::media::MediaFile;
/// use ytfetch::source::MediaSource;
///
/// let file = MediaFile::from_path(Path::new("song.mp3")).unwrap();
/// let source = MediaSource::parse("https://youtu.be/abc").unwrap();
/// let command = DownloadCommand::new(
///     &Config::default(),
///     &file,
///     Path::new("/media/music/song"),
///     &source,
///     false,
/// );
///
/// assert_eq!(command.program(), "youtube-dl");
/// assert_eq!(
///     command.to_string(),
///     "youtube-dl -f bestaudio https://youtu.be/abc -x --audio-format mp3 \
///      -o '/media/music/song.%(ext)s' --no-mtime"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCommand {
    program: String,
    args: Vec<OsString>,
}

impl DownloadCommand {
    /// Build the invocation for downloading `source` into `destination`
    /// (an extension-less path) in `file`'s format.
    #[must_use]
    pub fn new(
        config: &Config,
        file: &MediaFile,
        destination: &Path,
        source: &MediaSource,
        verbose: bool,
    ) -> Self {
        let mut args: Vec<OsString> = vec![
            "-f".into(),
            file.category().quality().into(),
            source.to_string().into(),
        ];
        args.extend(file.recode_args().into_iter().map(OsString::from));

        let mut output = destination.as_os_str().to_os_string();
        output.push(OUTPUT_TEMPLATE_SUFFIX);
        args.push("-o".into());
        args.push(output);

        if config.no_mtime() {
            args.push("--no-mtime".into());
        }
        if verbose {
            args.push("-v".into());
        }
        args.extend(config.extra_args().iter().map(OsString::from));

        Self {
            program: config.downloader().to_string(),
            args,
        }
    }

    /// The program that will be run.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed to the program.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run the downloader and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::DownloaderNotFound`] if the program cannot be found
    /// - [`Error::DownloadFailed`] if it exits unsuccessfully
    /// - [`Error::Io`] for any other spawn failure
    pub fn run(&self) -> Result<()> {
        log::debug!("Running {self}");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::DownloaderNotFound {
                    program: self.program.clone(),
                },
                _ => Error::Io(e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::DownloadFailed {
                program: self.program.clone(),
                code: status.code(),
            })
        }
    }
}

impl fmt::Display for DownloadCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(OsStr::new(&self.program)))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote `arg` for display the way a POSIX shell would need it.
fn shell_quote(arg: &OsStr) -> Cow<'_, str> {
    let text = arg.to_string_lossy();
    let is_plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@?&".contains(c));
    if is_plain {
        text
    } else {
        Cow::Owned(format!("'{}'", text.replace('\'', r"'\''")))
    }
}
