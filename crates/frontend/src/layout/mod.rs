pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell of the signed-in area.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |           |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn DashboardLayout(
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::sidebar::Sidebar />
            <div class="app-body">
                <TopHeader title=title />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
