use serde::Serialize;

use super::draft::FoodItemDraft;
use crate::shared::lenient::format_number;

/// Query parameters understood by the sheet webhook.
///
/// Every value travels as text; the flag is the literal `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookQuery {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "isVeg")]
    pub is_veg: String,
}

impl From<&FoodItemDraft> for WebhookQuery {
    fn from(draft: &FoodItemDraft) -> Self {
        Self {
            id: draft.id.to_string(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: format_number(draft.price),
            image: draft.image.clone(),
            rating: format_number(draft.rating),
            category: draft.category.clone(),
            is_veg: draft.is_veg.to_string(),
        }
    }
}

impl WebhookQuery {
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }

    /// Full request URL: `base?Id=..&Name=..`.
    pub fn to_url(&self, base_url: &str) -> Result<String, serde_qs::Error> {
        let query = self.to_query_string()?;
        let separator = if base_url.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", base_url, separator, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FoodItemDraft {
        FoodItemDraft {
            id: "8".into(),
            name: "Masala Dosa".into(),
            description: "d".into(),
            price: 50.0,
            image: "http://x/y.png".into(),
            rating: 4.0,
            category: "Breakfast".into(),
            is_veg: true,
        }
    }

    #[test]
    fn test_every_field_is_text() {
        let query = WebhookQuery::from(&draft());
        assert_eq!(query.price, "50");
        assert_eq!(query.rating, "4");
        assert_eq!(query.is_veg, "true");
    }

    #[test]
    fn test_url_contains_all_parameters_in_order() {
        let url = WebhookQuery::from(&draft())
            .to_url("https://hook.example/exec")
            .unwrap();
        assert!(url.starts_with("https://hook.example/exec?Id=8&Name=Masala"));
        for key in ["Description=d", "Price=50", "Rating=4", "Category=Breakfast", "isVeg=true"] {
            assert!(url.contains(key), "missing {key} in {url}");
        }
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_existing_query_in_base_url() {
        let url = WebhookQuery::from(&draft())
            .to_url("https://hook.example/exec?token=abc")
            .unwrap();
        assert!(url.starts_with("https://hook.example/exec?token=abc&Id=8"));
    }
}
