//! Shared error types for the application
//!
//! The analysis pipeline itself is total and never returns errors;
//! these cover the ambient surfaces (configuration, output).

use thiserror::Error;

/// Main error type for dpilint operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, Error>;
