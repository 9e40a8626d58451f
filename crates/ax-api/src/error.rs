use thiserror::Error;

/// Failure modes for control-plane API calls.
///
/// The CLI layer maps these into user-facing diagnostics; nothing here
/// terminates the process.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, body decode).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing / joining error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The token could not be turned into an `Authorization` header.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Non-2xx response. `payload` is the server's JSON error body and is
    /// printed verbatim by callers; no retry is attempted.
    #[error("API Error: {payload}")]
    Api {
        status: u16,
        payload: serde_json::Value,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {message}")]
    UnexpectedResponse { message: String },
}
