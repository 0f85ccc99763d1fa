use contracts::domain::a001_food_item::{FoodItemDraft, FoodItemId};
use contracts::shared::lenient::format_number;
use contracts::usecases::u503_menu_controller::ActiveEdit;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::Modal;

fn parse_number(label: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number", label))
}

/// Add/edit form for one menu item.
///
/// The Id field is read-only. The submit button stays disabled while a
/// submission is in flight; the form is closed by the parent.
#[component]
pub fn EditModal(
    edit: ActiveEdit,
    /// Existing category names, offered as suggestions
    #[prop(into)]
    categories: Signal<Vec<String>>,
    #[prop(into)] submitting: Signal<bool>,
    /// Last rejection of this form
    #[prop(into)]
    error: Signal<Option<String>>,
    on_submit: Callback<FoodItemDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_add = edit.mode.is_add();
    let draft = edit.draft;

    let id: FoodItemId = draft.id.clone();
    let name = RwSignal::new(draft.name.clone());
    let description = RwSignal::new(draft.description.clone());
    let price = RwSignal::new(format_number(draft.price));
    let rating = RwSignal::new(format_number(draft.rating));
    let category = RwSignal::new(draft.category.clone());
    let image = RwSignal::new(draft.image.clone());
    let is_veg = RwSignal::new(draft.is_veg);
    let local_error = RwSignal::new(None::<String>);

    let handle_submit = {
        let id = id.clone();
        move |_| {
            let parsed = parse_number("Price", &price.get())
                .and_then(|p| parse_number("Rating", &rating.get()).map(|r| (p, r)));
            let (price, rating) = match parsed {
                Ok(values) => values,
                Err(e) => {
                    local_error.set(Some(e));
                    return;
                }
            };
            local_error.set(None);

            on_submit.run(FoodItemDraft {
                id: id.clone(),
                name: name.get(),
                description: description.get(),
                price,
                image: image.get(),
                rating,
                category: category.get(),
                is_veg: is_veg.get(),
            });
        }
    };

    let title = if is_add { "Add New Food Item" } else { "Edit Food Item" };
    let submit_label = move || match (submitting.get(), is_add) {
        (true, true) => "Creating...",
        (true, false) => "Updating...",
        (false, true) => "Create Item",
        (false, false) => "Update Item",
    };
    let shown_error = move || local_error.get().or_else(|| error.get());

    view! {
        <Modal title=title.to_string() on_close=on_cancel>
            <div class="details-container food-item-details">
                {move || shown_error().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="details-grid--2col">
                    <div class="form__group">
                        <label class="form__label">"Id"</label>
                        <input class="form__input" type="text" prop:value=id.to_string() readonly />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Name"</label>
                        <Input value=name placeholder="Paneer Tikka" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Price (₹)"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Rating"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            max="5"
                            step="0.1"
                            prop:value=move || rating.get()
                            on:input=move |ev| rating.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Category"</label>
                        <input
                            class="form__input"
                            type="text"
                            list="food-item-categories"
                            prop:value=move || category.get()
                            on:input=move |ev| category.set(event_target_value(&ev))
                        />
                        <datalist id="food-item-categories">
                            {move || categories
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c></option> })
                                .collect_view()}
                        </datalist>
                    </div>

                    <div class="form__group details-flags">
                        <Checkbox checked=is_veg label="Vegetarian" />
                    </div>

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Description"</label>
                        <Textarea value=description attr:rows=3 />
                    </div>

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Image URL"</label>
                        <Input value=image placeholder="https://..." />
                    </div>
                </div>

                <div class="form-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=submitting
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_submit
                        disabled=submitting
                    >
                        {if is_add { icon("plus") } else { icon("edit") }}
                        " "
                        {submit_label}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("Price", " 49.5 "), Ok(49.5));
        assert_eq!(
            parse_number("Rating", ""),
            Err("Rating must be a number".to_string())
        );
    }
}
