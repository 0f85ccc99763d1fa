use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use leptos::prelude::*;

/// (label, icon, value) of the headline figures.
const STATS: &[(&str, &str, &str)] = &[
    ("Orders", "orders", "1,240"),
    ("Revenue", "revenue", "$32,500"),
    ("Sessions", "users", "4,918"),
];

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle="Welcome back! Here's what's happening with your business today.".to_string()
            >
                {()}
            </PageHeader>

            <div class="stat-grid">
                {STATS
                    .iter()
                    .map(|&(label, icon_name, value)| view! {
                        <StatCard label=label icon_name=icon_name value=value />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
