//! Top bar of the signed-in area: page title and the current operator.

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader(#[prop(into)] title: String) -> impl IntoView {
    let auth = use_auth();
    let email = move || {
        auth.with(|state| state.user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">{title}</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__user">
                    {icon("users")}
                    <span>{email}</span>
                </span>
            </div>
        </header>
    }
}
