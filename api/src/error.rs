//! Error types for the API client

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong between a repository call and its payload.
/// Repositories never let these escape raw — they arrive wrapped in
/// [`Outcome::Error`](crate::Outcome::Error).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, bad TLS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered but flagged the call as failed (`code != 1`).
    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller supplied invalid input; no remote call was made.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A pending `Loading` outcome was unwrapped.
    #[error("Operation not complete")]
    Incomplete,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}
