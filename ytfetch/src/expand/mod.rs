//! Environment variable expansion for destination paths.
//!
//! Destinations may reference environment variables as `${NAME}`, for
//! example `${MUSIC}/live/set.flac`. The [`Expander`] substitutes each
//! placeholder with the variable's value. When a variable is undefined the
//! user decides, through a [`Prompter`], whether to abort, type a
//! replacement, or keep the placeholder text as it is.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use std::path::PathBuf;
//! use ytfetch::expand::{prompt::Console, Expander};
//!
//! let vars = HashMap::from([("HOME".to_string(), "/users/alice".to_string())]);
//! let console = Console::new("".as_bytes(), Vec::new());
//! let mut expander = Expander::new(vars, console);
//!
//! let path = expander.expand("${HOME}/music/song.mp3").unwrap();
//! assert_eq!(path, PathBuf::from("/users/alice/music/song.mp3"));
//! ```

pub mod menu;
pub mod prompt;
pub mod scan;

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::{LogLevel, Logger};
use crate::path::normalize::normalize_lexically;

pub use menu::{parse_confirmation, parse_menu_choice, InvalidMenuInput, MenuChoice};
pub use prompt::{Console, Prompter};
pub use scan::{Placeholder, Segment};

use scan::segments;

/// Where variable values come from.
pub trait VariableSource {
    /// The value of `name`, or `None` if it is not defined.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VariableSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        // names the platform cannot store are never defined
        if name.contains(['=', '\0']) {
            return None;
        }
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl VariableSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Expands `${NAME}` placeholders using a variable source and a prompter.
#[derive(Debug)]
pub struct Expander<S, P> {
    source: S,
    prompter: P,
    logger: Logger,
}

impl<S: VariableSource, P: Prompter> Expander<S, P> {
    /// Create an expander that logs at the default level.
    pub fn new(source: S, prompter: P) -> Self {
        Self {
            source,
            prompter,
            logger: Logger::default(),
        }
    }

    /// Use `logger` for diagnostics. Matched placeholders are reported at
    /// debug level.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Expand every placeholder in `text` and normalize the result lexically.
    ///
    /// Text without placeholders is only normalized. Placeholders whose
    /// variable is undefined are resolved through the prompter, once per
    /// occurrence, in order of appearance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Aborted`] if the user chooses to abort, or any error
    /// the prompter reports. Nothing is returned for the remaining
    /// placeholders in either case.
    pub fn expand(&mut self, text: &str) -> Result<PathBuf> {
        let expanded = self.expand_text(text)?;
        Ok(normalize_lexically(Path::new(&expanded)))
    }

    /// Expand every placeholder in `text` without normalizing.
    ///
    /// # Errors
    ///
    /// Same as [`Expander::expand`].
    pub fn expand_text(&mut self, text: &str) -> Result<String> {
        let mut output = String::with_capacity(text.len());

        for segment in segments(text) {
            match segment {
                Segment::Literal(literal) => output.push_str(literal),
                Segment::Placeholder(placeholder) => {
                    self.logger
                        .debug(&format!("Matched placeholder {}", placeholder.token));
                    match self.source.lookup(placeholder.name) {
                        Some(value) => output.push_str(&value),
                        None => output.push_str(&self.resolve_undefined(placeholder)?),
                    }
                }
            }
        }

        Ok(output)
    }

    /// Ask the user what an undefined placeholder should become.
    fn resolve_undefined(&mut self, placeholder: Placeholder<'_>) -> Result<String> {
        match self.prompter.choose(placeholder.name, placeholder.token)? {
            MenuChoice::Abort => Err(Error::Aborted {
                variable: placeholder.name.to_string(),
            }),
            MenuChoice::NewValue => self.prompter.replacement(placeholder.name),
            MenuChoice::Continue => Ok(placeholder.token.to_string()),
        }
    }
}

/// Expand `text` against the process environment, prompting on the
/// terminal for undefined variables.
///
/// With `verbose`, each matched placeholder is reported on stderr.
///
/// # Errors
///
/// Returns [`Error::Aborted`] if the user aborts, or an I/O error from the
/// terminal.
pub fn expand(text: &str, verbose: bool) -> Result<PathBuf> {
    let level = if verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };
    Expander::new(ProcessEnv, Console::stdio())
        .with_logger(Logger::new(level))
        .expand(text)
}
