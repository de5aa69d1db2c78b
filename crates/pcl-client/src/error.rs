//! Client error types.

use pcl_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the institute backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, bad body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `error` or `details` from the body, or a per-operation fallback.
        message: String,
    },

    /// 2xx response whose envelope did not carry `success: true`.
    #[error("{0}")]
    Rejected(String),

    /// The bearer token is missing or was refused.
    #[error("session rejected by the server — run `pcl auth login`")]
    Unauthorized,

    /// Response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A file part could not be read.
    #[error("upload error: {0}")]
    Upload(String),

    /// Client-side validation failed; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}
