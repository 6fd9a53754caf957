//! Logging infrastructure for the ytfetch library.
//!
//! Diagnostics go to stderr so that stdout stays reserved for the resolved
//! destination path and the downloader's own output.

use std::env;
use std::fmt;

/// Environment variable consulted when no CLI verbosity flag is given.
pub const LOG_MODE_ENV: &str = "YTFETCH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use ytfetch::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages (matched placeholders,
    /// the downloader command line).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytfetch::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger.
///
/// The same logger also serves as the backend of the `log` facade once
/// [`Logger::install`] has been called, so `log::debug!` lines from the
/// library internals appear under `--verbose`.
///
/// # Examples
///
/// ```
/// use ytfetch::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("$MUSIC is not set, using the current directory");
/// logger.debug("not printed below Verbose");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytfetch::{Logger, LogLevel};
    ///
    /// assert_eq!(Logger::new(LogLevel::Quiet).level(), LogLevel::Quiet);
    /// ```
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true when debug output is enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytfetch::{Logger, LogLevel};
    ///
    /// assert!(Logger::new(LogLevel::Verbose).is_verbose());
    /// assert!(!Logger::new(LogLevel::Normal).is_verbose());
    /// ```
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.level >= LogLevel::Verbose
    }

    /// Logs an error message. Suppressed only at Quiet.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytfetch::{Logger, LogLevel};
    ///
    /// // prints "ERROR: youtube-dl exited with status 1" to stderr
    /// Logger::new(LogLevel::Normal).error("youtube-dl exited with status 1");
    /// // prints nothing
    /// Logger::new(LogLevel::Quiet).error("youtube-dl exited with status 1");
    /// ```
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytfetch::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// logger.info("Searching for \"live at pompeii\"");
    /// ```
    pub fn info(&self, message: &str) {
        if self.is_verbose() {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Verbose level.
    pub fn debug(&self, message: &str) {
        if self.is_verbose() {
            eprintln!("DEBUG: {message}");
        }
    }

    /// Installs this logger as the backend of the `log` facade.
    ///
    /// The facade's maximum level follows the logger: nothing at Quiet,
    /// warnings and errors at Normal, everything down to debug at Verbose.
    /// Only the first call in a process installs a backend; later calls
    /// only adjust the maximum level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ytfetch::{Logger, LogLevel};
    ///
    /// Logger::new(LogLevel::Verbose).install();
    /// assert_eq!(log::max_level(), log::LevelFilter::Debug);
    ///
    /// // printed as "DEBUG: Creating parent directories music"
    /// log::debug!("Creating parent directories music");
    /// ```
    pub fn install(self) {
        log::set_max_level(self.max_level());
        // a backend installed earlier in the process stays in place
        let _ = log::set_boxed_logger(Box::new(self));
    }

    fn max_level(&self) -> log::LevelFilter {
        match self.level {
            LogLevel::Quiet => log::LevelFilter::Off,
            LogLevel::Normal => log::LevelFilter::Warn,
            LogLevel::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.error(&message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `YTFETCH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use ytfetch::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
