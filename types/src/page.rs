use serde::{Deserialize, Serialize};

/// A page of results. The API calls the item array `list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "list")]
    pub items: Vec<T>,
    pub page: u32,
    pub total: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_renames_items_to_list() {
        let json = r#"{"list":["a","b"],"page":1,"total":2}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0], "a");
        assert_eq!(serde_json::to_string(&page).unwrap(), json);
    }
}
