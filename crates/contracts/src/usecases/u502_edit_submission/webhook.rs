use async_trait::async_trait;

use crate::shared::error::MenuResult;

/// Raw answer of the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as JSON when it parses, otherwise the raw text as a JSON string.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|_| serde_json::Value::String(self.body.clone()))
    }
}

/// Write side of the remote menu sheet.
///
/// Implementations issue a GET to `url` following redirects and return the
/// response whatever its status. Only transport failures are errors, as
/// [`MenuError::SubmissionFailed`](crate::shared::error::MenuError::SubmissionFailed).
#[async_trait(?Send)]
pub trait MenuWebhook {
    async fn get(&self, url: &str) -> MenuResult<WebhookResponse>;
}
