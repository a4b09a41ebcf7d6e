use serde::{Deserialize, Serialize};

/// A tournament or community event open for enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city_id: Option<String>,
    #[serde(default)]
    pub arena_name: Option<String>,
    #[serde(default)]
    pub starts_at: Option<u64>,
    #[serde(default)]
    pub fee_cents: Option<u64>,
    #[serde(default)]
    pub enrolled: u32,
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// One row of a user's event history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: String,
    pub event_name: String,
    #[serde(default)]
    pub finished_at: Option<u64>,
    #[serde(default)]
    pub placing: Option<u32>,
}
