use serde::{Deserialize, Serialize};

/// A selectable city. The platform keys everything regional (matches, events,
/// arenas, rankings) off the city id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
}

impl City {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// First-run default before the user picks a city.
impl Default for City {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            name: "北京市".to_string(),
        }
    }
}
