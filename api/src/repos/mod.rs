//! One narrow repository per backend domain
//!
//! Every method validates its typed parameters, runs the remote call inside
//! [`Outcome::guard`](crate::Outcome::guard), and interprets the response
//! envelope. No raw maps cross the public boundary, and no error leaves a
//! repository as anything but [`Outcome::Error`](crate::Outcome::Error).

mod arenas;
mod events;
mod matches;
mod public;
mod toplists;
mod user;

pub use arenas::ArenaRepo;
pub use events::EventRepo;
pub use matches::MatchRepo;
pub use public::PublicRepo;
pub use toplists::TopListRepo;
pub use user::UserRepo;

use crate::error::{ClientError, ClientResult};

/// Reject blank/whitespace-only parameters before any remote call.
pub(crate) fn require_not_blank(field: &str, value: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(())
}
