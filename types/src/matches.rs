use serde::{Deserialize, Serialize};

/// Lifecycle of a match as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Ongoing,
    Finished,
}

/// A single match in a listing or detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: String,
    #[serde(default)]
    pub event_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub arena_name: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<u64>,
    pub status: MatchStatus,
    #[serde(default)]
    pub home_player: Option<String>,
    #[serde(default)]
    pub away_player: Option<String>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

/// Score-entry payload posted for a finished match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
