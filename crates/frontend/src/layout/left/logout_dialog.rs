use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::{do_logout, use_auth};

/// Asks before ending the session.
#[component]
pub fn LogoutDialog(on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let confirm = move |_| {
        do_logout(auth);
        on_close.run(());
        toasts.success("Logged out", "You have been signed out.");
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <Modal title="Log out?".to_string() on_close=on_close>
            <p class="confirm-text">"Are you sure you want to log out?"</p>
            <div class="form-actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="button button--primary" on:click=confirm>
                    "Logout"
                </button>
            </div>
        </Modal>
    }
}
