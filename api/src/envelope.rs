//! The `{code, msg, data}` envelope every API response uses

use crate::error::{ClientError, ClientResult};
use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// The sole success sentinel. HTTP status is not consulted.
pub const CODE_OK: i32 = 1;

/// Outer wrapper of every response body, regardless of endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload. `code != 1` becomes a [`ClientError::Api`]
    /// carrying the server's message; a success without `data` is a decode
    /// error, since the caller expected a payload.
    pub fn into_data(self) -> ClientResult<T> {
        self.into_ack()?
            .ok_or_else(|| ClientError::Decode(serde_json::Error::custom("envelope has no data")))
    }

    /// Check the verdict of an endpoint whose success carries no payload,
    /// returning whatever `data` came along with it.
    pub fn into_ack(self) -> ClientResult<Option<T>> {
        if self.code != CODE_OK {
            return Err(ClientError::Api {
                code: self.code,
                message: self.msg,
            });
        }
        Ok(self.data)
    }
}

/// Parse a raw response body and unwrap its payload.
pub(crate) fn decode<T: DeserializeOwned>(raw: Value) -> ClientResult<T> {
    let envelope: Envelope<T> = serde_json::from_value(raw)?;
    envelope.into_data()
}

/// Parse a raw response body, keeping only the success/failure verdict.
pub(crate) fn decode_ack(raw: Value) -> ClientResult<()> {
    let envelope: Envelope<Value> = serde_json::from_value(raw)?;
    envelope.into_ack().map(|_| ())
}
