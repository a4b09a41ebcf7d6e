//! Uniform outcome type for asynchronous remote operations

use crate::error::{ClientError, ClientResult};
use std::future::Future;

/// What became of a remote call. UI code holds `Loading` while a call is in
/// flight and renders whichever terminal variant replaces it; no try/catch
/// anywhere. Repositories only ever return `Success` or `Error`.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Error(ClientError),
    Loading,
}

impl<T> Outcome<T> {
    /// Run a fallible operation, capturing any failure into `Error`.
    ///
    /// This is the single entry point of every repository method: no error
    /// escapes a repository as anything but a value.
    pub async fn guard<F>(op: F) -> Outcome<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        match op.await {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Error(e),
        }
    }

    /// Transform the success payload; `Error` and `Loading` pass through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Error(e) => Outcome::Error(e),
            Outcome::Loading => Outcome::Loading,
        }
    }

    /// Chain a dependent operation; short-circuits on `Error` and `Loading`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Error(e) => Outcome::Error(e),
            Outcome::Loading => Outcome::Loading,
        }
    }

    /// Unwrap into a plain `Result`. `Loading` becomes
    /// [`ClientError::Incomplete`] — only terminal outcomes carry a verdict.
    pub fn into_result(self) -> ClientResult<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Error(e) => Err(e),
            Outcome::Loading => Err(ClientError::Incomplete),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Outcome::Loading)
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Outcome::Error(e) => Some(e),
            _ => None,
        }
    }
}
