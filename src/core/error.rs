//! Custom error types for the application.
//!
//! Each domain gets its own error so failures can be mapped precisely to
//! what the visitor sees:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`CompletionError`] - Text-completion service failures
//! - [`StorageError`] - Browser storage failures for the inquiry sink
//! - [`TreeError`] - Bundled virtual tree definition could not be read

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network request failed (CORS, DNS, connection reset, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failures of the text-completion collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(#[from] FetchError),
    #[error("completion service rejected the request: {0}")]
    Service(String),
    #[error("completion timed out after {0} ms")]
    Timeout(u32),
}

/// Failures of the inquiry persistence sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialization(String),
    /// Write was refused (quota, privacy mode).
    #[error("failed to write to localStorage")]
    WriteFailed,
}

/// The virtual tree definition could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid file tree definition: {0}")]
pub struct TreeError(pub String);
