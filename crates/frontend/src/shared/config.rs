//! Build-time configuration.
//!
//! Endpoints are baked in at compile time, e.g.
//! `MENU_ITEMS_URL=https://... trunk build`. Missing values leave the
//! corresponding feature unconfigured; the app still starts.

use contracts::shared::config::{IdentityConfig, MenuEndpoints};

pub fn menu_endpoints() -> MenuEndpoints {
    let endpoints = MenuEndpoints::from_env_values(
        option_env!("MENU_ITEMS_URL"),
        option_env!("MENU_CATEGORIES_URL"),
        option_env!("MENU_WEBHOOK_URL"),
    );
    if endpoints.webhook_url.is_none() {
        log::warn!("MENU_WEBHOOK_URL is not set, menu edits will fail");
    }
    endpoints
}

pub fn identity_config() -> IdentityConfig {
    IdentityConfig::from_env_values(
        option_env!("IDENTITY_API_KEY"),
        option_env!("IDENTITY_BASE_URL"),
    )
}
