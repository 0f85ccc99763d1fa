use contracts::system::auth::{IdentityErrorResponse, PasswordAuthRequest, PasswordAuthResponse};
use gloo_net::http::Request;

use crate::shared::config::identity_config;

/// Sign in with email and password
pub async fn sign_in(email: &str, password: &str) -> Result<PasswordAuthResponse, String> {
    call("signInWithPassword", &PasswordAuthRequest::new(email.trim(), password)).await
}

/// Create an account with email and password
pub async fn sign_up(email: &str, password: &str) -> Result<PasswordAuthResponse, String> {
    call("signUp", &PasswordAuthRequest::new(email.trim(), password)).await
}

async fn call(method: &str, request: &PasswordAuthRequest) -> Result<PasswordAuthResponse, String> {
    let config = identity_config();
    if !config.is_configured() {
        return Err("Authentication is not configured (IDENTITY_API_KEY)".to_string());
    }

    let response = Request::post(&config.endpoint(method))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<IdentityErrorResponse>().await {
            Ok(body) => body.error.friendly_message(),
            Err(_) => format!("Request failed: {}", status),
        });
    }

    response
        .json::<PasswordAuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
