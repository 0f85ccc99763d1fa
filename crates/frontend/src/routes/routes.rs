use crate::dashboards::d400_overview::OverviewPage;
use crate::domain::a001_food_item::ui::list::MenuPage;
use crate::layout::DashboardLayout;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route
                    path=path!("/dashboard")
                    view=|| view! {
                        <RequireAuth>
                            <DashboardLayout title="Dashboard">
                                <OverviewPage />
                            </DashboardLayout>
                        </RequireAuth>
                    }
                />
                // The menu page enforces its own session check on initialize.
                <Route
                    path=path!("/dashboard/menu")
                    view=|| view! {
                        <DashboardLayout title="Menu">
                            <MenuPage />
                        </DashboardLayout>
                    }
                />
            </Routes>
        </Router>
    }
}
