use courtside_api::{ClientError, UserRepo};
use tokio::sync::{broadcast, mpsc};
use tracing::Instrument;

use super::commands::{SessionCommand, SessionError};
use super::events::SessionEvent;
use super::state::SessionState;

/// The main session actor loop.
/// Owns all mutable state. Processes commands sequentially, so no two
/// mutations (in particular login/logout) ever interleave.
pub(crate) async fn run_session_actor(
    state: SessionState,
    users: UserRepo,
    cmd_rx: mpsc::Receiver<SessionCommand>,
    event_tx: broadcast::Sender<SessionEvent>,
) {
    run_session_actor_inner(state, users, cmd_rx, event_tx)
        .instrument(tracing::info_span!("session"))
        .await;
}

async fn run_session_actor_inner(
    mut state: SessionState,
    users: UserRepo,
    mut cmd_rx: mpsc::Receiver<SessionCommand>,
    event_tx: broadcast::Sender<SessionEvent>,
) {
    tracing::info!(logged_in = state.is_logged_in(), "Session actor started");

    loop {
        match cmd_rx.recv().await {
            Some(SessionCommand::Shutdown) | None => {
                tracing::info!("Session actor shutting down");
                break;
            }
            Some(cmd) => handle_command(&mut state, &users, cmd, &event_tx).await,
        }
    }

    tracing::info!("Session actor exited");
}

async fn handle_command(
    state: &mut SessionState,
    users: &UserRepo,
    cmd: SessionCommand,
    event_tx: &broadcast::Sender<SessionEvent>,
) {
    match cmd {
        SessionCommand::Login {
            username,
            password,
            reply,
        } => {
            let _ = event_tx.send(SessionEvent::StateChanged(state.begin_login()));

            let result = match users.login(&username, &password).await.into_result() {
                Ok(data) => state.complete_login(data),
                Err(e) => {
                    let err = login_error(e);
                    state.fail_login(err.to_message());
                    Err(err)
                }
            };
            let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
            let _ = reply.send(result);
        }
        SessionCommand::Logout { reply } => {
            // Best effort: the token gets cleared locally no matter what
            // the server says.
            if let Some(e) = users.logout().await.error() {
                tracing::warn!("Remote logout failed, clearing local session anyway: {}", e);
            }
            let result = state.clear_session();
            let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
            let _ = reply.send(result);
        }
        SessionCommand::SetSelectedCity { city, reply } => {
            let result = state.set_selected_city(city);
            if result.is_ok() {
                let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
            }
            let _ = reply.send(result);
        }
        SessionCommand::AddSearchTerm { term, reply } => {
            let result = state.add_search_term(&term);
            if result.is_ok() {
                let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
            }
            let _ = reply.send(result);
        }
        SessionCommand::ClearSearchHistory { reply } => {
            let result = state.clear_search_history();
            if result.is_ok() {
                let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
            }
            let _ = reply.send(result);
        }
        SessionCommand::SetMoreMode { enabled, reply } => {
            let result = state.set_more_mode(enabled);
            if result.is_ok() {
                let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
            }
            let _ = reply.send(result);
        }
        SessionCommand::RefreshProfile { reply } => {
            // Background refresh: a failure keeps the stale profile visible
            // instead of blanking it, and is only logged.
            let result = match users.profile().await.into_result() {
                Ok(profile) => {
                    let result = state.set_profile(profile);
                    if result.is_ok() {
                        let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
                    }
                    result
                }
                Err(e) => {
                    tracing::warn!("Profile refresh failed, keeping cached profile: {}", e);
                    Ok(state.snapshot())
                }
            };
            let _ = reply.send(result);
        }
        SessionCommand::Reset { reply } => {
            let result = state.reset();
            let _ = event_tx.send(SessionEvent::StateChanged(state.snapshot()));
            let _ = reply.send(result);
        }
        SessionCommand::GetSnapshot { reply } => {
            let _ = reply.send(state.snapshot());
        }
        SessionCommand::Subscribe { reply } => {
            let _ = reply.send((state.snapshot(), event_tx.subscribe()));
        }
        SessionCommand::Shutdown => unreachable!("handled by the actor loop"),
    }
}

/// Map a repository failure to the session-level error. The server's own
/// message is what the user sees for rejected credentials.
fn login_error(e: ClientError) -> SessionError {
    match e {
        ClientError::Validation(msg) => SessionError::Validation(msg),
        ClientError::Api { message, .. } => SessionError::Auth(message),
        other => SessionError::Auth(other.to_string()),
    }
}

impl SessionError {
    /// The user-facing message carried by this error, without the variant
    /// prefix, for the snapshot's `last_error` field.
    fn to_message(&self) -> String {
        match self {
            SessionError::Validation(msg)
            | SessionError::Auth(msg)
            | SessionError::Remote(msg)
            | SessionError::Internal(msg) => msg.clone(),
            SessionError::Store(e) => e.to_string(),
        }
    }
}
