//! Remote-call abstraction and its HTTP implementation

use crate::error::ClientResult;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the session token on every authenticated request.
const TOKEN_HEADER: &str = "token";
/// Header carrying the per-request correlation id.
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// The remote-call boundary. Implementations return the raw envelope JSON;
/// repositories interpret it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Value>;
    async fn post(&self, path: &str, body: Value) -> ClientResult<Value>;
}

/// Shared cell holding the current session token.
///
/// The session layer writes it, the transport reads it on every request.
/// Configured once at startup; there is no global. Clones observe the same
/// value.
#[derive(Debug, Clone)]
pub struct TokenCell {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl TokenCell {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, token: impl Into<String>) {
        self.tx.send_replace(Some(token.into()));
    }

    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    pub fn get(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Watch for token changes (e.g. to invalidate caches on logout).
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }
}

impl Default for TokenCell {
    fn default() -> Self {
        Self::new()
    }
}

/// `Transport` over reqwest against a single base host.
///
/// Success is decided by the envelope's `code`, never by HTTP status, so
/// responses are decoded regardless of status. Timeouts, retries and
/// interceptor chains are the embedding application's concern.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token: TokenCell,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, token: TokenCell) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn decorate(&self, req: reqwest::RequestBuilder, request_id: Uuid) -> reqwest::RequestBuilder {
        let req = req.header(REQUEST_ID_HEADER, request_id.to_string());
        match self.token.get() {
            Some(token) => req.header(TOKEN_HEADER, token),
            None => req,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Value> {
        let request_id = Uuid::new_v4();
        let url = self.url(path);
        async {
            let req = self.decorate(self.http.get(&url).query(query), request_id);
            let raw = req.send().await?.json::<Value>().await?;
            Ok(raw)
        }
        .instrument(tracing::debug_span!("api_get", path, id = %request_id))
        .await
    }

    async fn post(&self, path: &str, body: Value) -> ClientResult<Value> {
        let request_id = Uuid::new_v4();
        let url = self.url(path);
        async {
            let req = self.decorate(self.http.post(&url).json(&body), request_id);
            let raw = req.send().await?.json::<Value>().await?;
            Ok(raw)
        }
        .instrument(tracing::debug_span!("api_post", path, id = %request_id))
        .await
    }
}
