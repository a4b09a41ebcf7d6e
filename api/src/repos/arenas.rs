//! Arena (venue) lookup

use super::require_not_blank;
use crate::envelope;
use crate::outcome::Outcome;
use crate::transport::Transport;
use courtside_types::{Arena, Page};
use std::sync::Arc;

const LIST_PATH: &str = "/arena/list";
const DETAIL_PATH: &str = "/arena/detail";

/// Client for the venue endpoints.
pub struct ArenaRepo {
    transport: Arc<dyn Transport>,
}

impl ArenaRepo {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Page through the arenas of a city, optionally filtered by a search
    /// keyword. An empty keyword means no filter.
    pub async fn arenas(
        &self,
        city_id: &str,
        keyword: Option<&str>,
        page: u32,
    ) -> Outcome<Page<Arena>> {
        Outcome::guard(async {
            require_not_blank("city_id", city_id)?;
            let mut query = vec![
                ("city_id", city_id.to_string()),
                ("page", page.to_string()),
            ];
            if let Some(keyword) = keyword.map(str::trim).filter(|k| !k.is_empty()) {
                query.push(("keyword", keyword.to_string()));
            }
            let raw = self.transport.get(LIST_PATH, &query).await?;
            envelope::decode(raw)
        })
        .await
    }

    /// Fetch a single arena.
    pub async fn arena_detail(&self, id: &str) -> Outcome<Arena> {
        Outcome::guard(async {
            require_not_blank("id", id)?;
            let query = [("id", id.to_string())];
            let raw = self.transport.get(DETAIL_PATH, &query).await?;
            envelope::decode(raw)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockCall, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_arenas_decodes_a_page() {
        let mock = MockTransport::new().with_data(
            LIST_PATH,
            json!({
                "list": [{"id": "a1", "name": "Olympic Center", "court_count": 8}],
                "page": 1,
                "total": 1
            }),
        );
        let repo = ArenaRepo::new(Arc::new(mock));

        let page = repo.arenas("1", None, 1).await.success().unwrap();
        assert_eq!(page.items[0].name, "Olympic Center");
        assert_eq!(page.items[0].court_count, Some(8));
    }

    #[tokio::test]
    async fn test_blank_keyword_is_not_sent() {
        let mock = Arc::new(MockTransport::new().with_data(
            LIST_PATH,
            json!({"list": [], "page": 1, "total": 0}),
        ));
        let repo = ArenaRepo::new(mock.clone());

        repo.arenas("1", Some("  "), 1).await.success().unwrap();
        repo.arenas("1", Some("olympic"), 1).await.success().unwrap();

        match &mock.calls()[..] {
            [MockCall::Get { query: first, .. }, MockCall::Get { query: second, .. }] => {
                assert!(!first.iter().any(|(k, _)| k == "keyword"));
                assert!(second.contains(&("keyword".to_string(), "olympic".to_string())));
            }
            other => panic!("expected two Gets, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_arena_detail() {
        let mock = MockTransport::new().with_data(
            DETAIL_PATH,
            json!({"id": "a1", "name": "Olympic Center", "address": "1 Main St"}),
        );
        let repo = ArenaRepo::new(Arc::new(mock));

        let arena = repo.arena_detail("a1").await.success().unwrap();
        assert_eq!(arena.address.as_deref(), Some("1 Main St"));
    }
}
