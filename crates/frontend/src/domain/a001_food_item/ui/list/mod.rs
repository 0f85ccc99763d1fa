pub mod card;
pub mod filters;

use contracts::domain::a001_food_item::{FoodItem, FoodItemDraft};
use contracts::usecases::u501_menu_data::{LoadState, MenuDataStore};
use contracts::usecases::u502_edit_submission::EditSubmission;
use contracts::usecases::u503_menu_controller::{
    ActiveEdit, CommitOutcome, MenuController, MenuSnapshot,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;
use thaw::*;

use self::card::FoodCard;
use self::filters::SearchAndFilters;
use super::details::EditModal;
use crate::domain::a001_food_item::api::{HttpMenuSource, HttpWebhook};
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::menu_endpoints;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::BrowserSession;

fn build_controller() -> MenuController {
    let endpoints = menu_endpoints();
    let webhook_url = endpoints.webhook_url.clone();
    let store = MenuDataStore::new(Rc::new(HttpMenuSource::new(endpoints)));
    let submission = EditSubmission::new(Rc::new(HttpWebhook), Rc::new(use_toasts()), webhook_url);
    let session = BrowserSession::new(use_navigate());
    MenuController::new(store, submission, Rc::new(session))
}

#[component]
fn LoadingState() -> impl IntoView {
    view! {
        <div class="menu-state">
            <Spinner />
            <span class="menu-state__text">"Loading menu items..."</span>
        </div>
    }
}

#[component]
fn ErrorState(#[prop(into)] error: Signal<String>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="menu-state menu-state--error">
            <h3 class="menu-state__title">"Error Loading Menu"</h3>
            <p class="menu-state__text">{move || error.get()}</p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_retry.run(())>
                {icon("refresh")}
                " Try Again"
            </Button>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="menu-state">
            <h3 class="menu-state__title">"No items found"</h3>
            <p class="menu-state__text">"Try adjusting your search or filter criteria"</p>
        </div>
    }
}

/// Menu management page: browse, filter, add and edit items.
///
/// The page owns one [`MenuController`]; every handler calls into it and then
/// copies a fresh [`MenuSnapshot`] into the `snapshot` signal that the view
/// reads. Async continuations use `try_set`, so a response that arrives after
/// the page was left is dropped silently.
#[component]
pub fn MenuPage() -> impl IntoView {
    let controller = Rc::new(build_controller());
    let snapshot = RwSignal::new(MenuSnapshot {
        load_state: LoadState::Loading,
        loading: true,
        ..Default::default()
    });
    // Form on screen. Outlives the controller's active edit by the close delay.
    let modal = RwSignal::new(None::<ActiveEdit>);
    let closing = RwSignal::new(false);

    {
        let controller = controller.clone();
        spawn_local(async move {
            controller.initialize().await;
            snapshot.try_set(controller.snapshot());
        });
    }

    let controller = StoredValue::new_local(controller);
    let refresh = move || {
        snapshot.set(controller.get_value().snapshot());
    };

    let open_form = move || {
        closing.set(false);
        modal.set(controller.get_value().active_edit());
        refresh();
    };

    let on_add = move |_| {
        controller.get_value().begin_add();
        open_form();
    };

    let on_edit = Callback::new(move |item: FoodItem| {
        controller.get_value().begin_edit(&item);
        open_form();
    });

    let on_cancel = Callback::new(move |_| {
        if snapshot.with_untracked(|s| s.submitting) {
            return;
        }
        controller.get_value().cancel_edit();
        closing.set(false);
        modal.set(None);
        refresh();
    });

    let on_submit = Callback::new(move |draft: FoodItemDraft| {
        let controller = controller.get_value();
        snapshot.update(|s| s.submitting = true);
        spawn_local(async move {
            let outcome = controller.commit_edit(draft).await;
            snapshot.try_set(controller.snapshot());
            match outcome {
                CommitOutcome::Committed(receipt) => {
                    closing.try_set(true);
                    TimeoutFuture::new(receipt.close_after.as_millis() as u32).await;
                    if closing.try_get_untracked() == Some(true) {
                        closing.try_set(false);
                        modal.try_set(None);
                    }
                }
                CommitOutcome::Rejected(err) => log::debug!("edit not committed: {}", err),
                CommitOutcome::Ignored => {
                    modal.try_set(None);
                }
            }
        });
    });

    let on_retry = Callback::new(move |_| {
        let controller = controller.get_value();
        snapshot.update(|s| {
            s.loading = true;
            s.load_state = LoadState::Loading;
        });
        spawn_local(async move {
            controller.retry_load().await;
            snapshot.try_set(controller.snapshot());
        });
    });

    let on_search = Callback::new(move |term: String| {
        controller.get_value().search(term);
        refresh();
    });

    let on_select = Callback::new(move |name: String| {
        controller.get_value().select_category(name);
        refresh();
    });

    let is_loading = Memo::new(move |_| snapshot.with(|s| s.loading));
    let load_error = Memo::new(move |_| snapshot.with(|s| s.load_state.error().map(String::from)));
    let search_term = Signal::derive(move || snapshot.with(|s| s.criteria.search_term.clone()));
    let selected_category =
        Signal::derive(move || snapshot.with(|s| s.criteria.selected_category.clone()));
    let categories = Signal::derive(move || snapshot.with(|s| s.categories.clone()));
    // Names offered in the form; "All" is a filter, not a category.
    let form_categories = Signal::derive(move || {
        snapshot.with(|s| s.categories.iter().skip(1).cloned().collect::<Vec<_>>())
    });
    let submitting = Signal::derive(move || snapshot.with(|s| s.submitting) || closing.get());
    let form_error = Signal::derive(move || {
        snapshot.with(|s| s.active_edit.as_ref().and(s.error.clone()))
    });

    view! {
        <div class="page menu-page">
            <PageHeader
                title="Our Menu"
                subtitle="Discover delicious food items from our kitchen".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_add
                    disabled=Signal::derive(move || is_loading.get() || load_error.get().is_some())
                >
                    {icon("plus")}
                    " Add New Item"
                </Button>
            </PageHeader>

            <Show when=move || !is_loading.get() fallback=|| view! { <LoadingState /> }>
                <Show
                    when=move || load_error.get().is_none()
                    fallback=move || view! {
                        <ErrorState
                            error=Signal::derive(move || load_error.get().unwrap_or_default())
                            on_retry=on_retry
                        />
                    }
                >
                    <SearchAndFilters
                        search_term=search_term
                        categories=categories
                        selected_category=selected_category
                        on_search=on_search
                        on_select=on_select
                    />

                    {move || {
                        let items = snapshot.with(|s| s.filtered_items.clone());
                        if items.is_empty() {
                            view! { <EmptyState /> }.into_any()
                        } else {
                            view! {
                                <div class="food-grid">
                                    {items
                                        .into_iter()
                                        .map(|item| view! { <FoodCard item=item on_edit=on_edit /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </Show>
            </Show>

            {move || {
                modal.get().map(|edit| view! {
                    <EditModal
                        edit=edit
                        categories=form_categories
                        submitting=submitting
                        error=form_error
                        on_submit=on_submit
                        on_cancel=on_cancel
                    />
                })
            }}
        </div>
    }
}
