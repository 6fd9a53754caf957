//! Interactive prompting.
//!
//! The [`Prompter`] trait is the seam between the expander and the user.
//! [`Console`] implements it over any reader/writer pair, which is stdin and
//! stdout in the CLI and in-memory buffers in tests.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::error::{Error, Result};
use crate::expand::menu::{parse_confirmation, parse_menu_choice, MenuChoice};

/// Asks the user how to resolve an undefined variable.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask which [`MenuChoice`] to apply to the placeholder `token` whose
    /// variable `name` is undefined. Invalid answers are retried inside
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed or the terminal cannot be written.
    fn choose(&mut self, name: &str, token: &str) -> Result<MenuChoice>;

    /// Ask for a replacement value for `name`. Any text, including an empty
    /// line, is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed or the terminal cannot be written.
    fn replacement(&mut self, name: &str) -> Result<String>;
}

/// Line-oriented console over a reader and a writer.
///
/// # Examples
///
/// ```
/// use ytfetch::expand::prompt::Console;
///
/// let mut output = Vec::new();
/// let mut console = Console::new("https://youtu.be/abc\n".as_bytes(), &mut output);
/// let url = console.ask("Enter URL: ").unwrap();
/// assert_eq!(url, "https://youtu.be/abc");
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// A console over the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed {
                prompt: prompt.trim_end_matches([' ', ':']).to_string(),
            });
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Ask a yes/no question until the answer is `y` or `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{question}(y/n): "))?;
            match parse_confirmation(&answer) {
                Ok(confirmed) => return Ok(confirmed),
                Err(invalid) => {
                    writeln!(self.output, "entered: '{}'", invalid.input)?;
                    writeln!(self.output, "You may only type 'y' or 'n'.")?;
                }
            }
        }
    }

    /// Write one line of output.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the writer fails.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Consume the console and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn choose(&mut self, name: &str, token: &str) -> Result<MenuChoice> {
        loop {
            writeln!(self.output, "The environment variable {name} doesn't exist.")?;
            writeln!(self.output, "1) Abort (A)")?;
            writeln!(self.output, "2) Enter new value (N)")?;
            writeln!(self.output, "3) Continue with '{token}' (C)")?;
            let answer = self.ask("Enter option (A/N/C): ")?;

            match parse_menu_choice(&answer) {
                Ok(choice) => return Ok(choice),
                Err(invalid) => {
                    writeln!(self.output, "entered: '{}'", invalid.input)?;
                    writeln!(self.output, "You may only type 'A' or 'N' or 'C'.")?;
                }
            }
        }
    }

    fn replacement(&mut self, name: &str) -> Result<String> {
        self.ask(&format!("Enter new value for {name}: "))
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn choose(&mut self, name: &str, token: &str) -> Result<MenuChoice> {
        (**self).choose(name, token)
    }

    fn replacement(&mut self, name: &str) -> Result<String> {
        (**self).replacement(name)
    }
}
