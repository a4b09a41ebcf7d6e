//! Durable key-value preference store.
//!
//! Holds session and preference data that must survive process restarts:
//! the auth token, the cached user profile, the selected city, bounded
//! history lists, and feature flags. Reads never fail the caller; writes
//! are strict and durable before they return.

pub mod keys;
pub mod paths;
mod prefs;

pub use prefs::PrefStore;

/// Errors from the preference store. Only mutations surface these;
/// reads degrade to "absent" and log instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
