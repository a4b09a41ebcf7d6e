//! Session and preference state for the Courtside client.
//!
//! One actor task owns all mutable session state: auth lifecycle, the
//! selected city, bounded history lists and feature flags. UI code holds a
//! cloneable [`SessionHandle`], awaits mutations, and observes changes
//! through broadcast [`SessionEvent`]s. Every mutation is written through
//! to the preference store before the caller sees it, so state survives
//! process restarts.

mod actor;
mod commands;
mod events;
mod handle;
mod snapshot;
mod state;

use std::sync::Arc;

use courtside_api::{TokenCell, UserRepo};
use courtside_store::PrefStore;
use tokio::sync::{broadcast, mpsc};

use actor::run_session_actor;
pub use commands::SessionError;
pub use events::SessionEvent;
pub use handle::SessionHandle;
pub use snapshot::{AuthPhase, SessionSnapshot};
use state::SessionState;

/// The process-wide session. Spawned once at startup.
pub struct Session;

impl Session {
    /// Hydrate state from `store`, publish any persisted token into
    /// `token_cell`, and spawn the actor task. The returned handle (and its
    /// clones) is the sole way to read or mutate session state.
    pub fn spawn(store: Arc<PrefStore>, users: UserRepo, token_cell: TokenCell) -> SessionHandle {
        let state = SessionState::hydrate(store, token_cell);
        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        let (event_tx, _) = broadcast::channel(100);

        tokio::spawn(run_session_actor(state, users, cmd_rx, event_tx));

        SessionHandle::new(cmd_tx)
    }
}
