use courtside_store::StoreError;
use courtside_types::City;
use tokio::sync::{broadcast, oneshot};

use super::events::SessionEvent;
use super::snapshot::SessionSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The caller supplied invalid input; nothing was attempted.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// Login failed; carries the server's message verbatim.
    #[error("Authentication failed: {0}")]
    Auth(String),
    /// A preference write failed; in-memory state may be ahead of disk.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
    /// A remote call other than login failed.
    #[error("Remote call failed: {0}")]
    Remote(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Commands sent to the session actor. Each embeds a oneshot for the reply.
pub enum SessionCommand {
    Login {
        username: String,
        password: String,
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    Logout {
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    SetSelectedCity {
        city: City,
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    AddSearchTerm {
        term: String,
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    ClearSearchHistory {
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    SetMoreMode {
        enabled: bool,
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    RefreshProfile {
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    Reset {
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    GetSnapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    Subscribe {
        reply: oneshot::Sender<(SessionSnapshot, broadcast::Receiver<SessionEvent>)>,
    },
    Shutdown,
}
