//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use ytfetch::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { music_var: Some("A=B".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the downloader is blank or a directory
    /// variable name could never be set in the environment.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(downloader) = &config.downloader {
            if downloader.trim().is_empty() {
                return Err(Error::Validation {
                    field: "downloader".into(),
                    message: "Downloader cannot be empty".into(),
                });
            }
        }

        if let Some(name) = &config.music_var {
            Self::validate_var_name("music_var", name)?;
        }
        if let Some(name) = &config.videos_var {
            Self::validate_var_name("videos_var", name)?;
        }

        Ok(())
    }

    /// Validate an environment variable name.
    fn validate_var_name(field: &str, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Variable name cannot be empty".into(),
            });
        }
        if name.contains(['=', '\0']) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid variable name '{name}': must not contain '=' or NUL"),
            });
        }
        Ok(())
    }
}
