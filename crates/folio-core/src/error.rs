//! Error types for folio-core

use thiserror::Error;

use crate::config::ConfigError;
use crate::http::HttpError;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Main error type for folio operations.
///
/// The loader never returns these for resource failures (it degrades to
/// empty collections instead); they surface from configuration, argument
/// parsing, and direct transport use.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Resource body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Locale tag names no supported locale
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed user input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
