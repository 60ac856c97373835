//! Error types for shellprint-core

use thiserror::Error;

/// Main error type for the shellprint-core library
#[derive(Error, Debug)]
pub enum Error {
    /// The user's home directory could not be resolved. This is the only
    /// fatal condition: without it no shell path can be expanded.
    #[error("could not resolve the user home directory")]
    Home,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Narrative service error. Recoverable: the numeric profile stays
    /// valid, only the generated narrative sections are withheld.
    #[error("narrative error: {0}")]
    Narrative(String),
}

/// Result type alias for shellprint-core
pub type Result<T> = std::result::Result<T, Error>;
