//! HTTP adapters of the menu core: the two sheet reads and the write
//! webhook.

use async_trait::async_trait;
use contracts::domain::a001_food_item::FoodItem;
use contracts::shared::config::MenuEndpoints;
use contracts::shared::error::{MenuError, MenuResult};
use contracts::usecases::u501_menu_data::MenuSource;
use contracts::usecases::u502_edit_submission::{MenuWebhook, WebhookResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::RequestRedirect;

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    if url.is_empty() {
        return Err("Endpoint not configured".to_string());
    }

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch data: HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Reads the menu and the category list from the published sheet.
pub struct HttpMenuSource {
    endpoints: MenuEndpoints,
}

impl HttpMenuSource {
    pub fn new(endpoints: MenuEndpoints) -> Self {
        Self { endpoints }
    }
}

#[async_trait(?Send)]
impl MenuSource for HttpMenuSource {
    async fn fetch_items(&self) -> MenuResult<Vec<FoodItem>> {
        log::debug!("fetching menu items from {}", self.endpoints.menu_url);
        fetch_json(&self.endpoints.menu_url)
            .await
            .map_err(MenuError::FetchFailed)
    }

    async fn fetch_categories(&self) -> MenuResult<Vec<String>> {
        log::debug!("fetching categories from {}", self.endpoints.categories_url);
        fetch_json(&self.endpoints.categories_url)
            .await
            .map_err(MenuError::FetchFailed)
    }
}

/// Plain GET against the sheet webhook, following redirects.
pub struct HttpWebhook;

#[async_trait(?Send)]
impl MenuWebhook for HttpWebhook {
    async fn get(&self, url: &str) -> MenuResult<WebhookResponse> {
        let response = Request::get(url)
            .redirect(RequestRedirect::Follow)
            .send()
            .await
            .map_err(|e| MenuError::SubmissionFailed(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(WebhookResponse { status, body })
    }
}
