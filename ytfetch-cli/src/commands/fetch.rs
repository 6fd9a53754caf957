//! Fetch command implementation.
//!
//! This module implements the `fetch` command, which expands a destination
//! path, resolves its directory and hands the download to the configured
//! downloader.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_destination, GlobalOptions};
use clap::Args;
use std::io::{BufRead, Write};
use ytfetch::{Console, DownloadCommand, MediaSource};

/// Download a video, or only its audio, into a file path.
#[derive(Args)]
pub struct FetchCommand {
    /// Destination file; `${NAME}` placeholders are expanded (prompted if omitted)
    #[arg(value_name = "FILEPATH")]
    pub filepath: Option<String>,

    /// Video URL or search text (prompted if omitted)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Print the downloader command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Search for unsupported URLs without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl FetchCommand {
    /// Execute the fetch command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut console = Console::stdio();

        // 1. Destination: prompt if needed, then expand and resolve
        let filepath = match self.filepath {
            Some(path) => path,
            None => console.ask("Enter filepath: ")?,
        };
        let destination = prepare_destination(&filepath, &mut console, &config, global.logger)?;
        println!("{}", destination.display_path());

        // 2. Source: a supported URL, or a search if the user agrees
        let url = match self.url {
            Some(url) => url,
            None => console.ask("Enter URL: ")?,
        };
        let source = choose_source(&url, self.yes, &mut console)?;

        // 3. Build the downloader invocation
        let command = DownloadCommand::new(
            &config,
            &destination.file,
            &destination.absolute,
            &source,
            global.verbose,
        );

        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would run:");
            }
            println!("{command}");
            return Ok(());
        }

        global.logger.debug(&format!("Running {command}"));
        command.run()?;
        Ok(())
    }
}

/// Turn user input into a media source, asking before falling back to a
/// search.
fn choose_source<R: BufRead, W: Write>(
    text: &str,
    assume_yes: bool,
    console: &mut Console<R, W>,
) -> Result<MediaSource, CliError> {
    if let Some(source) = MediaSource::parse(text) {
        return Ok(source);
    }

    if assume_yes || console.confirm(&format!("Search \"{text}\" on youtube instead?"))? {
        Ok(MediaSource::search(text))
    } else {
        Err(CliError::Declined(format!("'{text}' is not a supported URL")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_supported_url_needs_no_confirmation() {
        let mut c = console("");
        let source = choose_source("https://youtu.be/abc", false, &mut c).unwrap();
        assert_eq!(source, MediaSource::Url("https://youtu.be/abc".into()));
        assert!(c.into_output().is_empty());
    }

    #[test]
    fn test_search_after_confirmation() {
        let mut c = console("y\n");
        let source = choose_source("daft punk live", false, &mut c).unwrap();
        assert_eq!(source, MediaSource::search("daft punk live"));

        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Search \"daft punk live\" on youtube instead?(y/n): "));
    }

    #[test]
    fn test_declined_search() {
        let mut c = console("n\n");
        let err = choose_source("daft punk live", false, &mut c).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_assume_yes_skips_question() {
        let mut c = console("");
        let source = choose_source("lofi", true, &mut c).unwrap();
        assert!(source.is_search());
    }
}
