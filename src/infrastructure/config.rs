//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables, with
//! sensible defaults for everything:
//!
//! - `FINDER_PAGE_SIZE`: items per page in catalog listings (default 10)
//! - `FINDER_CATALOG_FILE`: catalog file to load without prompting
//!
//! Invalid values produce a [`ConfigError`] rather than being silently
//! ignored; the entry point decides whether to fall back to defaults.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the items-per-page count.
const PAGE_SIZE_KEY: &str = "FINDER_PAGE_SIZE";

/// Environment variable naming the default catalog file.
const CATALOG_FILE_KEY: &str = "FINDER_CATALOG_FILE";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// Values are loaded from environment variables using
/// [`AppConfig::from_env`]; `Default` supplies the built-in values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of products shown per page in listings.
    pub page_size: usize,
    /// Catalog file to load at startup instead of prompting.
    pub catalog_file: Option<PathBuf>,
}

impl AppConfig {
    /// Items per page when `FINDER_PAGE_SIZE` is not set.
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Loads the configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `FINDER_PAGE_SIZE` is set
    /// but is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let page_size = parse_page_size(env::var(PAGE_SIZE_KEY).ok().as_deref())?;
        let catalog_file = env::var(CATALOG_FILE_KEY)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            page_size,
            catalog_file,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            catalog_file: None,
        }
    }
}

/// Parses the page size value, defaulting when the variable is unset.
fn parse_page_size(raw: Option<&str>) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(AppConfig::DEFAULT_PAGE_SIZE),
        Some(value) => match value.trim().parse::<usize>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ConfigError::InvalidValue {
                key: PAGE_SIZE_KEY.to_string(),
                message: format!("expected a positive integer, got '{value}'"),
            }),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
