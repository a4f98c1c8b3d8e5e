//! Error types for Traxo API calls.

use thiserror::Error;

/// Result type for Traxo API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong during a call.
///
/// Nothing is retried internally; each variant surfaces unchanged to the
/// caller. A call either returns a fully-typed result or one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS, timeout or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. The raw body is kept for caller inspection;
    /// "not found" is just a 404 here, not a distinct variant.
    #[error("API returned HTTP {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response parsed as JSON but its root shape does not match what
    /// the endpoint is documented to return.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A required environment variable was unset (env-based construction).
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}
