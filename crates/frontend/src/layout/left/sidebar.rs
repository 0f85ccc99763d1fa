//! Sidebar with the page links and the logout action.

use crate::layout::left::logout_dialog::LogoutDialog;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/dashboard", "Dashboard", "dashboard"),
    ("/dashboard/menu", "Menu", "menu"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let confirm_open = RwSignal::new(false);
    let collapsed = RwSignal::new(false);

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=move || collapsed.get()>
            <div class="app-sidebar__brand">
                <span class="app-sidebar__label">"Restaurant Admin"</span>
                <button
                    class="button button--icon app-sidebar__toggle"
                    title=move || if collapsed.get() { "Expand" } else { "Collapse" }
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {icon("menu")}
                </button>
            </div>
            <nav class="app-sidebar__content">
                {NAV_ITEMS
                    .iter()
                    .map(|&(href, label, icon_name)| {
                        let pathname = location.pathname;
                        view! {
                            <A href=href attr:class="app-sidebar__link">
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || pathname.get() == href
                                >
                                    {icon(icon_name)}
                                    <span class="app-sidebar__label">{label}</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="app-sidebar__footer">
                <button class="app-sidebar__item" on:click=move |_| confirm_open.set(true)>
                    {icon("log-out")}
                    <span class="app-sidebar__label">"Logout"</span>
                </button>
            </div>
            <Show when=move || confirm_open.get()>
                <LogoutDialog on_close=Callback::new(move |_| confirm_open.set(false)) />
            </Show>
        </aside>
    }
}
