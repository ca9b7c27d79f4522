//! API client errors.

use thiserror::Error;

/// Errors from the upstream cat data services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the upstream.
        status: u16,
        /// Response body, when one was readable.
        message: String,
    },

    /// Upstream returned a 429 Too Many Requests response.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
