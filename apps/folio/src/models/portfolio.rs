//! Portfolio-page content schema (`portfolio` key of `data.json`).

use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<PortfolioCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioItem {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub chips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_category_tree() {
        let portfolio: Portfolio = serde_json::from_value(json!({
            "title": "Selected work",
            "categories": [
                {"name": "Web", "items": [
                    {"description": "Shop", "url": "https://shop.example", "chips": ["Rust", "Axum"]},
                    {"description": "Blog"}
                ]}
            ]
        }))
        .unwrap();
        let items = &portfolio.categories[0].items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].chips, vec!["Rust", "Axum"]);
        assert!(items[1].url.is_none());
        assert!(items[1].chips.is_empty());
    }

    #[test]
    fn test_null_chips_and_description_default() {
        let item: PortfolioItem =
            serde_json::from_value(json!({"description": null, "chips": null})).unwrap();
        assert_eq!(item.description, "");
        assert!(item.chips.is_empty());
    }
}
