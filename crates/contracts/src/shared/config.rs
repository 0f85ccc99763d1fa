//! Endpoint and timing configuration of the menu core.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the edit form stays visible after a successful submission.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_millis(1000);

/// Default lifetime of a notification.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;

/// Remote sheet endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEndpoints {
    /// GET, returns a JSON array of menu items.
    pub menu_url: String,
    /// GET, returns a JSON array of category names.
    pub categories_url: String,
    /// GET with the item as query parameters. `None` when not configured.
    pub webhook_url: Option<String>,
}

impl MenuEndpoints {
    /// Build from raw environment values; blank values count as missing.
    pub fn from_env_values(
        menu_url: Option<&str>,
        categories_url: Option<&str>,
        webhook_url: Option<&str>,
    ) -> Self {
        let clean = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
        Self {
            menu_url: clean(menu_url).unwrap_or_default(),
            categories_url: clean(categories_url).unwrap_or_default(),
            webhook_url: clean(webhook_url),
        }
    }
}

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Hosted email/password identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub api_key: String,
    pub base_url: String,
}

impl IdentityConfig {
    pub fn from_env_values(api_key: Option<&str>, base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_IDENTITY_BASE_URL);
        Self {
            api_key: api_key.map(str::trim).unwrap_or_default().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// URL of an `accounts:<method>` call, e.g. `signInWithPassword`.
    pub fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{}?key={}", self.base_url, method, self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_webhook_is_unconfigured() {
        let endpoints = MenuEndpoints::from_env_values(Some("https://a"), None, Some("  "));
        assert_eq!(endpoints.menu_url, "https://a");
        assert_eq!(endpoints.categories_url, "");
        assert_eq!(endpoints.webhook_url, None);
    }

    #[test]
    fn test_endpoints_deserialize() {
        let json = r#"{"menu_url":"m","categories_url":"c","webhook_url":"w"}"#;
        let endpoints: MenuEndpoints = serde_json::from_str(json).unwrap();
        assert_eq!(endpoints.webhook_url.as_deref(), Some("w"));
    }

    #[test]
    fn test_identity_endpoint() {
        let config = IdentityConfig::from_env_values(Some("k123"), None);
        assert!(config.is_configured());
        assert_eq!(
            config.endpoint("signUp"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=k123"
        );

        let local = IdentityConfig::from_env_values(None, Some("http://localhost:9099/v1/"));
        assert!(!local.is_configured());
        assert_eq!(
            local.endpoint("signInWithPassword"),
            "http://localhost:9099/v1/accounts:signInWithPassword?key="
        );
    }
}
