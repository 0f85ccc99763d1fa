use serde::{Deserialize, Serialize};
use std::fmt;

/// Session capability handed to the menu core.
///
/// The core never reads ambient storage; whoever builds the controller
/// decides what "authenticated" means and how the login redirect happens.
pub trait AuthSession {
    fn is_authenticated(&self) -> bool;
    fn redirect_to_login(&self);
}

pub const MIN_PASSWORD_LEN: usize = 6;

// ============================================================================
// Identity provider DTOs (email/password REST API)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl PasswordAuthRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            return_secure_token: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthResponse {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Error envelope: `{"error": {"code": 400, "message": "EMAIL_NOT_FOUND"}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityErrorResponse {
    pub error: IdentityErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityErrorBody {
    pub code: u16,
    pub message: String,
}

impl IdentityErrorBody {
    /// Operator-facing text for the provider's error codes.
    pub fn friendly_message(&self) -> String {
        let code = self.message.split(':').next().unwrap_or("").trim();
        match code {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                "Invalid email or password".to_string()
            }
            "EMAIL_EXISTS" => "An account with this email already exists".to_string(),
            "USER_DISABLED" => "This account has been disabled".to_string(),
            "TOO_MANY_ATTEMPTS_TRY_LATER" => {
                "Too many attempts, please try again later".to_string()
            }
            "WEAK_PASSWORD" => format!(
                "Password should be at least {} characters",
                MIN_PASSWORD_LEN
            ),
            _ => self.message.clone(),
        }
    }
}

// ============================================================================
// Credential validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    MissingEmail,
    InvalidEmail,
    MissingPassword,
    PasswordTooShort,
    PasswordMismatch,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::MissingEmail => write!(f, "Email is required"),
            CredentialError::InvalidEmail => write!(f, "Please enter a valid email address"),
            CredentialError::MissingPassword => write!(f, "Password is required"),
            CredentialError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            ),
            CredentialError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), CredentialError> {
    if email.trim().is_empty() {
        return Err(CredentialError::MissingEmail);
    }
    if password.is_empty() {
        return Err(CredentialError::MissingPassword);
    }
    Ok(())
}

pub fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(), CredentialError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CredentialError::MissingEmail);
    }
    if !email.contains('@') {
        return Err(CredentialError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(CredentialError::MissingPassword);
    }
    if password != confirm {
        return Err(CredentialError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_checks_confirmation_before_length() {
        assert_eq!(
            validate_signup("a@b.c", "abc", "abd"),
            Err(CredentialError::PasswordMismatch)
        );
        assert_eq!(
            validate_signup("a@b.c", "abc", "abc"),
            Err(CredentialError::PasswordTooShort)
        );
        assert_eq!(validate_signup("a@b.c", "secret", "secret"), Ok(()));
    }

    #[test]
    fn test_signup_email() {
        assert_eq!(
            validate_signup(" ", "secret", "secret"),
            Err(CredentialError::MissingEmail)
        );
        assert_eq!(
            validate_signup("nobody", "secret", "secret"),
            Err(CredentialError::InvalidEmail)
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login("", "x"), Err(CredentialError::MissingEmail));
        assert_eq!(validate_login("a@b.c", ""), Err(CredentialError::MissingPassword));
        assert_eq!(validate_login("a@b.c", "x"), Ok(()));
    }

    #[test]
    fn test_identity_error_messages() {
        let json = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters"}}"#;
        let parsed: IdentityErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.error.friendly_message(),
            "Password should be at least 6 characters"
        );

        let body = IdentityErrorBody {
            code: 400,
            message: "EMAIL_NOT_FOUND".into(),
        };
        assert_eq!(body.friendly_message(), "Invalid email or password");
    }

    #[test]
    fn test_request_uses_camel_case() {
        let json = serde_json::to_string(&PasswordAuthRequest::new("a@b.c", "pw")).unwrap();
        assert!(json.contains("\"returnSecureToken\":true"));
    }
}
