use contracts::domain::a001_food_item::{FoodItem, PLACEHOLDER_IMAGE};
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn FoodCard(item: FoodItem, on_edit: Callback<FoodItem>) -> impl IntoView {
    // Broken image links fall back to the placeholder once.
    let src = RwSignal::new(item.display_image().to_string());
    let on_image_error = move |_| {
        if src.get_untracked() != PLACEHOLDER_IMAGE {
            src.set(PLACEHOLDER_IMAGE.to_string());
        }
    };

    let (veg_class, veg_label) = if item.is_veg {
        ("food-card__diet food-card__diet--veg", "Veg")
    } else {
        ("food-card__diet food-card__diet--non-veg", "Non-veg")
    };
    let price = item.display_price();
    let rating = item.display_rating();
    let title = item.title.clone();
    let alt = item.title.clone();
    let description = item.description.clone();
    let category = item.category.clone();

    view! {
        <div class="food-card">
            <div class="food-card__media">
                <img
                    class="food-card__image"
                    src=move || src.get()
                    alt=alt
                    loading="lazy"
                    on:error=on_image_error
                />
                <div class="food-card__rating">
                    {icon("star")}
                    <span>{rating}</span>
                </div>
            </div>

            <div class="food-card__body">
                <div class="food-card__heading">
                    <h3 class="food-card__title">{title}</h3>
                    <span class="food-card__price">{price}</span>
                </div>
                <p class="food-card__description">{description}</p>
                <div class="food-card__footer">
                    <span class="food-card__category">{category}</span>
                    <span class=veg_class>{veg_label}</span>
                    <button
                        class="button button--primary button--small"
                        on:click=move |_| on_edit.run(item.clone())
                    >
                        {icon("edit")}
                        " Edit"
                    </button>
                </div>
            </div>
        </div>
    }
}
