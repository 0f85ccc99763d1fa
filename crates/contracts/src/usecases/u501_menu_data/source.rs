use async_trait::async_trait;

use crate::domain::a001_food_item::FoodItem;
use crate::shared::error::MenuResult;

/// Read side of the remote menu sheet.
///
/// Implementations report non-OK responses and transport failures as
/// [`MenuError::FetchFailed`](crate::shared::error::MenuError::FetchFailed).
#[async_trait(?Send)]
pub trait MenuSource {
    async fn fetch_items(&self) -> MenuResult<Vec<FoodItem>>;
    async fn fetch_categories(&self) -> MenuResult<Vec<String>>;
}
