//! Next id for a newly created menu item.
//!
//! Recomputed from the collection on every call; there is no separate
//! counter, so ids edited out of band are respected. Two add flows opened
//! before either commits will be offered the same id.

use crate::domain::a001_food_item::{FoodItem, FoodItemId};

/// `max(numeric id, non-numeric as 0) + 1`; `1` for an empty collection.
pub fn next_id_value(items: &[FoodItem]) -> i64 {
    items
        .iter()
        .map(|item| item.id.numeric_value().unwrap_or(0))
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

pub fn next_id(items: &[FoodItem]) -> FoodItemId {
    FoodItemId::from(next_id_value(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ids(ids: &[&str]) -> Vec<FoodItem> {
        ids.iter()
            .map(|id| FoodItem {
                id: FoodItemId::from(*id),
                title: String::new(),
                description: String::new(),
                category: String::new(),
                price: 0.0,
                rating: 0.0,
                image: String::new(),
                is_veg: false,
            })
            .collect()
    }

    #[test]
    fn test_empty_collection_starts_at_one() {
        assert_eq!(next_id_value(&[]), 1);
        assert_eq!(next_id(&[]).as_str(), "1");
    }

    #[test]
    fn test_non_numeric_ids_count_as_zero() {
        assert_eq!(next_id(&with_ids(&["3", "7", "x"])).as_str(), "8");
        assert_eq!(next_id_value(&with_ids(&["x", "y"])), 1);
    }

    #[test]
    fn test_ids_with_trailing_text() {
        assert_eq!(next_id_value(&with_ids(&["12a", "4"])), 13);
    }

    #[test]
    fn test_repeated_allocation_never_collides() {
        let mut items = with_ids(&["2", "abc", "5"]);
        for _ in 0..20 {
            let id = next_id(&items);
            assert!(items.iter().all(|i| i.id != id));
            items.extend(with_ids(&[id.as_str()]));
        }
        let mut ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }
}
