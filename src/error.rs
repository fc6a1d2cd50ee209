// src/error.rs

//! Unified error handling for the feed generator.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built or used
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A listing page could not be retrieved
    #[error("Failed to fetch page {page}: {message}")]
    Fetch { page: u32, message: String },

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Feed document could not be serialized
    #[error("Feed serialization error: {0}")]
    Feed(String),

    /// Feed or state file could not be written
    #[error("Failed to persist {path}: {message}")]
    Persist { path: String, message: String },
}

impl AppError {
    /// Create a fetch error for a page.
    pub fn fetch(page: u32, cause: impl fmt::Display) -> Self {
        Self::Fetch {
            page,
            message: cause.to_string(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a feed serialization error.
    pub fn feed(message: impl fmt::Display) -> Self {
        Self::Feed(message.to_string())
    }

    /// Create a persistence error for the given path.
    pub fn persist(path: &Path, message: impl fmt::Display) -> Self {
        Self::Persist {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}

/// The disclosure table was absent from a listing page.
///
/// Not a failure of the run; the crawl decides whether to skip the page or stop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("disclosure table not found")]
pub struct TableNotFound;
