//! Public reference data: city list and home-screen banners

use crate::envelope;
use crate::outcome::Outcome;
use crate::transport::Transport;
use courtside_types::{Banner, City};
use std::sync::Arc;

const CITIES_PATH: &str = "/city/list";
const BANNERS_PATH: &str = "/banner/list";

/// Client for the unauthenticated reference endpoints.
pub struct PublicRepo {
    transport: Arc<dyn Transport>,
}

impl PublicRepo {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// All cities the platform operates in.
    pub async fn cities(&self) -> Outcome<Vec<City>> {
        Outcome::guard(async {
            let raw = self.transport.get(CITIES_PATH, &[]).await?;
            envelope::decode(raw)
        })
        .await
    }

    /// Current home-screen banners.
    pub async fn banners(&self) -> Outcome<Vec<Banner>> {
        Outcome::guard(async {
            let raw = self.transport.get(BANNERS_PATH, &[]).await?;
            envelope::decode(raw)
        })
        .await
    }
}
