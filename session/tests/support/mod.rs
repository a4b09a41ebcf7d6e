//! Shared scaffolding for session integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use courtside_api::{MockTransport, TokenCell, Transport, UserRepo};
use courtside_session::{Session, SessionHandle};
use courtside_store::PrefStore;
use once_cell::sync::OnceCell;
use serde_json::json;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent, race-safe logging init. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to quiet.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const LOGIN_PATH: &str = "/user/login";
pub const LOGOUT_PATH: &str = "/user/logout";
pub const PROFILE_PATH: &str = "/user/profile";

/// Envelope payload of a successful login.
pub fn login_data(token: &str, nickname: &str) -> serde_json::Value {
    json!({
        "token": token,
        "user": {"user_id": "u1", "nickname": nickname, "points": 120}
    })
}

/// Everything a test needs to drive a session against a mock backend.
pub struct Harness {
    pub session: SessionHandle,
    pub store: Arc<PrefStore>,
    pub token_cell: TokenCell,
    pub mock: Arc<MockTransport>,
}

/// Spawn a session over `mock`, persisting into `dir`.
pub fn spawn_session(dir: &std::path::Path, mock: MockTransport) -> Harness {
    init_logging();
    let store = Arc::new(PrefStore::open(dir).expect("open store"));
    let token_cell = TokenCell::new();
    let mock = Arc::new(mock);
    let users = UserRepo::new(mock.clone() as Arc<dyn Transport>);
    let session = Session::spawn(store.clone(), users, token_cell.clone());
    Harness {
        session,
        store,
        token_cell,
        mock,
    }
}
