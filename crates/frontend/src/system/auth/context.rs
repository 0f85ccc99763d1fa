use contracts::system::auth::AuthSession;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use std::rc::Rc;

use super::storage::{self, SessionUser};
use super::api;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Restore the session of this tab, if any
    let auth_state = RwSignal::new(AuthState {
        user: storage::load_user(),
    });
    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

fn sign_in_as(auth: RwSignal<AuthState>, user: SessionUser) {
    log::info!("signed in as {}", user.email);
    storage::save_user(&user);
    auth.set(AuthState { user: Some(user) });
}

pub async fn do_login(auth: RwSignal<AuthState>, email: String, password: String) -> Result<(), String> {
    let response = api::sign_in(&email, &password).await?;
    sign_in_as(auth, response.into());
    Ok(())
}

/// A new account is signed in right away.
pub async fn do_signup(auth: RwSignal<AuthState>, email: String, password: String) -> Result<(), String> {
    let response = api::sign_up(&email, &password).await?;
    sign_in_as(auth, response.into());
    Ok(())
}

pub fn do_logout(auth: RwSignal<AuthState>) {
    storage::clear_user();
    auth.set(AuthState::default());
}

/// Browser-backed session handed to the menu core.
///
/// Reads session storage on every check so a logout in the same tab is
/// seen immediately.
pub struct BrowserSession {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserSession {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self {
            navigate: Rc::new(navigate),
        }
    }
}

impl AuthSession for BrowserSession {
    fn is_authenticated(&self) -> bool {
        storage::load_user().is_some()
    }

    fn redirect_to_login(&self) {
        (self.navigate)(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }
}
