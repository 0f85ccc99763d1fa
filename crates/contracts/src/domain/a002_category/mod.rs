pub mod aggregate;

pub use aggregate::{CategorySet, ALL_CATEGORIES};
