//! Resource transports for the data loader

#[cfg(feature = "native")]
pub mod native;
pub mod dir;
pub mod memory;

#[cfg(feature = "native")]
pub use native::*;
pub use dir::DirTransport;
pub use memory::MemoryTransport;

use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Unexpected status {status} for {path}")]
    Status { status: u16, path: String },
    #[error("Not found: {path}")]
    NotFound { path: String },
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("IO error: {message}")]
    Io { message: String },
}

/// Fetches a resource body by relative path.
///
/// Paths are relative to whatever root the transport was built with (a base
/// URL, an asset directory, an in-memory map).
pub trait Transport: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<String, HttpError>> + Send;
}
