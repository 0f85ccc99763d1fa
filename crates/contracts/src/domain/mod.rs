pub mod a001_food_item;
pub mod a002_category;
