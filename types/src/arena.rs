use serde::{Deserialize, Serialize};

/// A venue where matches are played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city_id: Option<String>,
    #[serde(default)]
    pub court_count: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
}
