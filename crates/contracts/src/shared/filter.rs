//! Visible subset of the menu for the current search and category chip.

use serde::{Deserialize, Serialize};

use crate::domain::a001_food_item::FoodItem;
use crate::domain::a002_category::ALL_CATEGORIES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub selected_category: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, selected_category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_category: selected_category.into(),
        }
    }

    /// Case-insensitive substring on title or description, and an exact
    /// category match unless `"All"` is selected.
    pub fn matches(&self, item: &FoodItem) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = item.title.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle);
        let matches_category =
            self.selected_category == ALL_CATEGORIES || item.category == self.selected_category;
        matches_search && matches_category
    }
}

/// Stable filter; output keeps the collection order.
pub fn filter_items(items: &[FoodItem], criteria: &FilterCriteria) -> Vec<FoodItem> {
    items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect()
}

/// Memoized [`filter_items`].
///
/// The cache is keyed on the collection revision (bumped by every store
/// mutation) and the criteria, so repeated reads between changes reuse the
/// last result.
#[derive(Debug, Default)]
pub struct FilterView {
    cached: Option<(u64, FilterCriteria, Vec<FoodItem>)>,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute(&mut self, revision: u64, items: &[FoodItem], criteria: &FilterCriteria) -> &[FoodItem] {
        let fresh = matches!(&self.cached, Some((rev, c, _)) if *rev == revision && c == criteria);
        if !fresh {
            let result = filter_items(items, criteria);
            self.cached = Some((revision, criteria.clone(), result));
        }
        match &self.cached {
            Some((_, _, result)) => result.as_slice(),
            None => &[],
        }
    }
}
