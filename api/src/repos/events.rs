//! Event browsing, enrollment and participation history

use super::require_not_blank;
use crate::envelope::{self, Envelope};
use crate::error::ClientError;
use crate::outcome::Outcome;
use crate::transport::Transport;
use courtside_types::{EventInfo, EventRecord, Page};
use serde_json::{json, Value};
use std::sync::Arc;

const LIST_PATH: &str = "/event/list";
const DETAIL_PATH: &str = "/event/detail";
const ENROLL_PATH: &str = "/event/enroll";
const HISTORY_PATH: &str = "/event/history";

/// Client for the event endpoints.
///
/// The history endpoint has shipped with a quirk for years: clients degrade
/// malformed payloads to an empty history instead of an error. That behavior
/// is kept as the default here, switchable via [`strict_history`]
/// until product decides which way it should go.
///
/// [`strict_history`]: EventRepo::strict_history
pub struct EventRepo {
    transport: Arc<dyn Transport>,
    strict_history: bool,
}

impl EventRepo {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            strict_history: false,
        }
    }

    /// With `true`, malformed history payloads surface as
    /// [`Outcome::Error`] instead of degrading to an empty list.
    pub fn strict_history(mut self, strict: bool) -> Self {
        self.strict_history = strict;
        self
    }

    /// Page through the events of a city.
    pub async fn events(&self, city_id: &str, page: u32) -> Outcome<Page<EventInfo>> {
        Outcome::guard(async {
            require_not_blank("city_id", city_id)?;
            let query = [
                ("city_id", city_id.to_string()),
                ("page", page.to_string()),
            ];
            let raw = self.transport.get(LIST_PATH, &query).await?;
            envelope::decode(raw)
        })
        .await
    }

    /// Fetch a single event.
    pub async fn event_detail(&self, id: &str) -> Outcome<EventInfo> {
        Outcome::guard(async {
            require_not_blank("id", id)?;
            let query = [("id", id.to_string())];
            let raw = self.transport.get(DETAIL_PATH, &query).await?;
            envelope::decode(raw)
        })
        .await
    }

    /// Enroll the session user into an event.
    pub async fn enroll(&self, event_id: &str) -> Outcome<()> {
        Outcome::guard(async {
            require_not_blank("event_id", event_id)?;
            let raw = self
                .transport
                .post(ENROLL_PATH, json!({ "event_id": event_id }))
                .await?;
            envelope::decode_ack(raw)
        })
        .await
    }

    /// List the events a user took part in, newest first.
    ///
    /// Transport failures and server rejections (`code != 1`) are errors in
    /// both modes; only what happens to an unparseable payload depends on
    /// the [`strict_history`](Self::strict_history) flag.
    pub async fn history(&self, user_id: &str, page: u32) -> Outcome<Vec<EventRecord>> {
        let strict = self.strict_history;
        Outcome::guard(async {
            require_not_blank("user_id", user_id)?;
            let query = [
                ("user_id", user_id.to_string()),
                ("page", page.to_string()),
            ];
            let raw = self.transport.get(HISTORY_PATH, &query).await?;

            let env: Envelope<Value> = match serde_json::from_value(raw) {
                Ok(env) => env,
                Err(e) if strict => return Err(ClientError::Decode(e)),
                Err(e) => {
                    tracing::warn!("Degrading malformed history envelope to empty: {}", e);
                    return Ok(Vec::new());
                }
            };
            let data = match env.into_ack()? {
                Some(data) => data,
                None => return Ok(Vec::new()),
            };
            match serde_json::from_value(data) {
                Ok(records) => Ok(records),
                Err(e) if strict => Err(ClientError::Decode(e)),
                Err(e) => {
                    tracing::warn!("Degrading malformed history payload to empty: {}", e);
                    Ok(Vec::new())
                }
            }
        })
        .await
    }
}
