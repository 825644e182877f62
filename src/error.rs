//! Error types for Solidafy Chunks
//!
//! This module defines the error hierarchy for the crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Token decoding is the one place that does not surface through [`Error`]
//! by default: lenient decodes resolve to `None` and log a warning. The
//! strict decode path reports a [`TokenDecodeError`], which converts into
//! [`Error::InvalidToken`].

use crate::token::TokenDecodeError;
use thiserror::Error;

/// The main error type for Solidafy Chunks
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Token Errors
    // ============================================================================
    /// Key values could not be serialized into a pagination token
    #[error("Failed to encode pagination token: {message}")]
    Encoding { message: String },

    /// A pagination token was rejected by a strict decode
    #[error("Invalid pagination token: {0}")]
    InvalidToken(#[from] TokenDecodeError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Generic configuration problem
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A configuration field holds an unusable value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    /// YAML configuration could not be parsed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON input could not be parsed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Source Errors
    // ============================================================================
    /// The fetch collaborator failed to produce a chunk's content
    #[error("Chunk source failed: {message}")]
    Source { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Free-form error
    #[error("{0}")]
    Other(String),

    /// Error raised by collaborator code using `anyhow`
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a chunk source (fetch) error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Check if this error was caused by caller-supplied input rather than
    /// by a defect in configuration or code
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidToken(_))
    }
}

/// Result type alias for Solidafy Chunks
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
