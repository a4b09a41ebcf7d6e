//! Player rankings

use super::require_not_blank;
use crate::envelope;
use crate::outcome::Outcome;
use crate::transport::Transport;
use courtside_types::{Page, RankCategory, RankEntry};
use std::sync::Arc;

const RANKINGS_PATH: &str = "/top/list";

/// Client for the leaderboard endpoint.
pub struct TopListRepo {
    transport: Arc<dyn Transport>,
}

impl TopListRepo {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Page through a city's leaderboard for the given category.
    pub async fn rankings(
        &self,
        city_id: &str,
        category: RankCategory,
        page: u32,
    ) -> Outcome<Page<RankEntry>> {
        Outcome::guard(async {
            require_not_blank("city_id", city_id)?;
            let query = [
                ("city_id", city_id.to_string()),
                ("category", category.as_str().to_string()),
                ("page", page.to_string()),
            ];
            let raw = self.transport.get(RANKINGS_PATH, &query).await?;
            envelope::decode(raw)
        })
        .await
    }
}
