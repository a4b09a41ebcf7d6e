//! Mock Transport implementation for testing

use crate::error::{ClientError, ClientResult};
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

type Reply = Box<dyn Fn() -> ClientResult<Value> + Send>;

/// Canned-response transport keyed by request path, with a call log for
/// verification. Only compiled in test mode or with the `mock` feature.
///
/// A path with no configured reply answers with a `Network` error, like an
/// unreachable endpoint would.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Reply>>,
    call_log: Mutex<Vec<MockCall>>,
}

/// One recorded request.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        body: Value,
    },
}

impl MockCall {
    pub fn path(&self) -> &str {
        match self {
            MockCall::Get { path, .. } | MockCall::Post { path, .. } => path,
        }
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `path` with a raw envelope body.
    pub fn with_json(self, path: &str, value: Value) -> Self {
        self.insert(path, Box::new(move || Ok(value.clone())));
        self
    }

    /// Respond to `path` with a successful envelope wrapping `data`.
    pub fn with_data(self, path: &str, data: Value) -> Self {
        self.with_json(path, json!({"code": 1, "msg": "ok", "data": data}))
    }

    /// Respond to `path` with a failed envelope `{code, msg, data: null}`.
    pub fn with_status_code(self, path: &str, code: i32, msg: &str) -> Self {
        self.with_json(path, json!({"code": code, "msg": msg, "data": null}))
    }

    /// Respond to `path` by producing an error, e.g. a simulated network
    /// failure.
    pub fn with_error<F>(self, path: &str, f: F) -> Self
    where
        F: Fn() -> ClientError + Send + 'static,
    {
        self.insert(path, Box::new(move || Err(f())));
        self
    }

    /// Get recorded calls for verification.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    fn insert(&self, path: &str, reply: Reply) {
        self.replies.lock().unwrap().insert(path.to_string(), reply);
    }

    fn reply_for(&self, path: &str) -> ClientResult<Value> {
        let replies = self.replies.lock().unwrap();
        match replies.get(path) {
            Some(reply) => reply(),
            None => Err(ClientError::Network(format!(
                "no mock response configured for {}",
                path
            ))),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Value> {
        self.call_log.lock().unwrap().push(MockCall::Get {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        self.reply_for(path)
    }

    async fn post(&self, path: &str, body: Value) -> ClientResult<Value> {
        self.call_log.lock().unwrap().push(MockCall::Post {
            path: path.to_string(),
            body,
        });
        self.reply_for(path)
    }
}
