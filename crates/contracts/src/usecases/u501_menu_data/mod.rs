pub mod source;
pub mod store;

pub use source::MenuSource;
pub use store::{LoadState, MenuDataStore};
