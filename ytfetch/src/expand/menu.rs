//! Menu answer parsing.
//!
//! The interactive prompts only ever need to decide what a line of user
//! input means. Keeping that decision in pure functions lets the prompt
//! loops stay trivial and the parsing be tested without a terminal.

use std::fmt;

use thiserror::Error;

/// What to do with a placeholder whose variable is not defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Stop the whole run.
    Abort,
    /// Ask for a replacement value for this occurrence.
    NewValue,
    /// Keep the placeholder text literally.
    Continue,
}

impl MenuChoice {
    /// The single-letter code that selects this choice.
    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            Self::Abort => 'A',
            Self::NewValue => 'N',
            Self::Continue => 'C',
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::NewValue => write!(f, "new value"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// A menu answer that is not one of the accepted codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized menu input '{input}'")]
pub struct InvalidMenuInput {
    /// The answer as typed, without the line terminator.
    pub input: String,
}

impl InvalidMenuInput {
    fn new(raw: &str) -> Self {
        Self {
            input: raw.trim_end_matches(['\r', '\n']).to_string(),
        }
    }
}

/// Parse an answer to the undefined-variable menu.
///
/// Surrounding whitespace is ignored and the code is case-insensitive;
/// the answer must be exactly one of `A`, `N` or `C`.
///
/// # Errors
///
/// Returns [`InvalidMenuInput`] for anything else.
///
/// # Examples
///
/// ```
/// use ytfetch::expand::menu::{parse_menu_choice, MenuChoice};
///
/// assert_eq!(parse_menu_choice("c\n").unwrap(), MenuChoice::Continue);
/// assert_eq!(parse_menu_choice(" N ").unwrap(), MenuChoice::NewValue);
/// assert!(parse_menu_choice("abort").is_err());
/// ```
pub fn parse_menu_choice(raw: &str) -> Result<MenuChoice, InvalidMenuInput> {
    match single_char(raw).map(|c| c.to_ascii_uppercase()) {
        Some('A') => Ok(MenuChoice::Abort),
        Some('N') => Ok(MenuChoice::NewValue),
        Some('C') => Ok(MenuChoice::Continue),
        _ => Err(InvalidMenuInput::new(raw)),
    }
}

/// Parse an answer to a yes/no question (`y` or `n`, case-insensitive).
///
/// # Errors
///
/// Returns [`InvalidMenuInput`] for anything else.
///
/// # Examples
///
/// ```
/// use ytfetch::expand::menu::parse_confirmation;
///
/// assert_eq!(parse_confirmation("Y"), Ok(true));
/// assert_eq!(parse_confirmation("n\n"), Ok(false));
/// assert!(parse_confirmation("yes").is_err());
/// ```
pub fn parse_confirmation(raw: &str) -> Result<bool, InvalidMenuInput> {
    match single_char(raw).map(|c| c.to_ascii_lowercase()) {
        Some('y') => Ok(true),
        Some('n') => Ok(false),
        _ => Err(InvalidMenuInput::new(raw)),
    }
}

/// The only character of `raw` after trimming, if there is exactly one.
fn single_char(raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
