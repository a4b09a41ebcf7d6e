//! Domain models shared by the Courtside client core.
//!
//! These mirror the wire shapes of the platform's REST API and double as the
//! records persisted by the preference store. Transport and persistence live
//! in their own crates; nothing here touches I/O.

pub mod arena;
pub mod city;
pub mod events;
pub mod matches;
pub mod page;
pub mod public;
pub mod rankings;
pub mod user;

pub use arena::Arena;
pub use city::City;
pub use events::{EventInfo, EventRecord};
pub use matches::{MatchInfo, MatchStatus, ScoreReport};
pub use page::Page;
pub use public::Banner;
pub use rankings::{RankCategory, RankEntry};
pub use user::{LoginData, ProfileUpdate, UserProfile};
