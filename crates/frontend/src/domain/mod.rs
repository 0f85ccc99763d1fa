pub mod a001_food_item;
