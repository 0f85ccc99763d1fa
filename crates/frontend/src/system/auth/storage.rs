use contracts::system::auth::PasswordAuthResponse;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Presence of this key marks the tab as signed in.
const USER_KEY: &str = "user";

/// Signed-in operator, kept for the lifetime of the browser tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
}

impl From<PasswordAuthResponse> for SessionUser {
    fn from(response: PasswordAuthResponse) -> Self {
        Self {
            local_id: response.local_id,
            email: response.email,
            id_token: response.id_token,
        }
    }
}

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

pub fn save_user(user: &SessionUser) {
    let Some(storage) = get_session_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
        }
        Err(e) => log::error!("failed to serialize session user: {}", e),
    }
}

/// Stored user, if any. An unreadable entry is dropped.
pub fn load_user() -> Option<SessionUser> {
    let raw = get_session_storage()?.get_item(USER_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding unreadable session entry: {}", e);
            clear_user();
            None
        }
    }
}

pub fn clear_user() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_from_response() {
        let json = r#"{"localId":"u1","email":"chef@example.com","idToken":"t","refreshToken":"r"}"#;
        let response: PasswordAuthResponse = serde_json::from_str(json).unwrap();
        let user = SessionUser::from(response);
        assert_eq!(user.local_id, "u1");
        assert_eq!(user.email, "chef@example.com");
        assert_eq!(user.id_token, "t");
    }
}
