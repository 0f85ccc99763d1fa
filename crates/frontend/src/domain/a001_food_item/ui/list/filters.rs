use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search box and category chips above the grid.
#[component]
pub fn SearchAndFilters(
    #[prop(into)] search_term: Signal<String>,
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] selected_category: Signal<String>,
    on_search: Callback<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="menu-filters">
            <div class="menu-filters__search">
                <span class="menu-filters__search-icon">{icon("search")}</span>
                <input
                    type="text"
                    class="form__input"
                    placeholder="Search food items..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
            </div>

            <div class="menu-filters__chips">
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|category| {
                            let name = category.clone();
                            let is_selected = {
                                let name = name.clone();
                                move || selected_category.get() == name
                            };
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=is_selected
                                    on:click=move |_| on_select.run(name.clone())
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
