//! # API Errors
//!
//! Error types for API operations.

use thiserror::Error;

/// Errors that can occur during API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP transport error (cannot resolve, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend returned an error status.
    #[error("server error: {status} - {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from the backend.
        message: String,
    },

    /// Failed to deserialize a response body.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// Local file error (e.g. upload source missing).
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
