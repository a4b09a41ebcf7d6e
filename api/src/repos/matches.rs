//! Match browsing and score entry

use super::require_not_blank;
use crate::envelope;
use crate::outcome::Outcome;
use crate::transport::Transport;
use courtside_types::{MatchInfo, Page, ScoreReport};
use serde_json::json;
use std::sync::Arc;

const LIST_PATH: &str = "/match/list";
const DETAIL_PATH: &str = "/match/detail";
const SCORE_PATH: &str = "/match/score";

/// Client for the match endpoints.
pub struct MatchRepo {
    transport: Arc<dyn Transport>,
}

impl MatchRepo {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Page through the matches of a city.
    pub async fn matches(&self, city_id: &str, page: u32) -> Outcome<Page<MatchInfo>> {
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

    /// Fetch a single match.
    pub async fn match_detail(&self, id: &str) -> Outcome<MatchInfo> {
        Outcome::guard(async {
            require_not_blank("id", id)?;
            let query = [("id", id.to_string())];
            let raw = self.transport.get(DETAIL_PATH, &query).await?;
            envelope::decode(raw)
        })
        .await
    }

    /// Report the final score of a match.
    pub async fn submit_score(&self, match_id: &str, report: &ScoreReport) -> Outcome<()> {
        Outcome::guard(async {
            require_not_blank("match_id", match_id)?;
            let body = json!({
                "match_id": match_id,
                "report": serde_json::to_value(report)?,
            });
            let raw = self.transport.post(SCORE_PATH, body).await?;
            envelope::decode_ack(raw)
        })
        .await
    }
}
