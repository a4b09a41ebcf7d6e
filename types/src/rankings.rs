use serde::{Deserialize, Serialize};

/// Which leaderboard to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankCategory {
    Points,
    WinRate,
}

impl RankCategory {
    /// Wire string used as the `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::WinRate => "win_rate",
        }
    }
}

/// One row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub user_id: String,
    pub nickname: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub points: u32,
    pub rank: u32,
}
