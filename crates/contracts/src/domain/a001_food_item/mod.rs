pub mod aggregate;
pub mod draft;
pub mod webhook_query;

pub use aggregate::{FoodItem, FoodItemId, FoodItemPatch, PLACEHOLDER_IMAGE};
pub use draft::{DraftViolation, EditMode, FoodItemDraft};
pub use webhook_query::WebhookQuery;
