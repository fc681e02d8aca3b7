//! Relay error types.

use thiserror::Error;

/// Reasons an upload did not produce a URL.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The photo could not be read from disk.
    #[error("failed to read image {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport error (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The host answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the host.
        status: u16,
        /// Provider error message, or the raw body if it had none.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The upload is not configured (no cloud name).
    #[error("upload is not configured: {0}")]
    NotConfigured(String),
}
