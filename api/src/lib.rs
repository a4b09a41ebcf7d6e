//! Courtside API client library
//!
//! Provides typed async repositories over the platform's JSON/HTTPS API.
//! Every endpoint answers with the same envelope `{code, msg, data}`;
//! repositories unwrap it and hand callers an [`Outcome`] instead of
//! raising errors.
//!
//! # Example
//!
//! ```no_run
//! use courtside_api::{ApiClient, TokenCell};
//!
//! #[tokio::main]
//! async fn main() {
//!     let token = TokenCell::new();
//!     let client = ApiClient::new("https://api.example.com", token);
//!     match client.public().cities().await.success() {
//!         Some(cities) => println!("{} cities", cities.len()),
//!         None => println!("request failed"),
//!     }
//! }
//! ```

mod client;
mod envelope;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod outcome;
mod repos;
mod transport;

pub use client::ApiClient;
pub use envelope::{Envelope, CODE_OK};
pub use error::{ClientError, ClientResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCall, MockTransport};
pub use outcome::Outcome;
pub use repos::{ArenaRepo, EventRepo, MatchRepo, PublicRepo, TopListRepo, UserRepo};
pub use transport::{HttpTransport, TokenCell, Transport};
