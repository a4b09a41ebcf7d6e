//! Facade bundling one shared transport and the per-domain repositories

use crate::repos::{ArenaRepo, EventRepo, MatchRepo, PublicRepo, TopListRepo, UserRepo};
use crate::transport::{HttpTransport, TokenCell, Transport};
use std::sync::Arc;

/// Entry point of the API layer: constructed once at startup, handed the
/// [`TokenCell`] the session layer writes tokens into, and asked for
/// repositories as screens need them. Repositories are cheap handles over
/// the one shared transport.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Client against `base_url` over HTTP, authenticating every request
    /// with whatever token `token` currently holds.
    pub fn new(base_url: impl Into<String>, token: TokenCell) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new(base_url, token)),
        }
    }

    /// Client over an arbitrary transport, e.g. a mock in tests.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> Arc<dyn Transport> {
        self.transport.clone()
    }

    pub fn users(&self) -> UserRepo {
        UserRepo::new(self.transport.clone())
    }

    pub fn matches(&self) -> MatchRepo {
        MatchRepo::new(self.transport.clone())
    }

    pub fn events(&self) -> EventRepo {
        EventRepo::new(self.transport.clone())
    }

    pub fn arenas(&self) -> ArenaRepo {
        ArenaRepo::new(self.transport.clone())
    }

    pub fn top_lists(&self) -> TopListRepo {
        TopListRepo::new(self.transport.clone())
    }

    pub fn public(&self) -> PublicRepo {
        PublicRepo::new(self.transport.clone())
    }
}
