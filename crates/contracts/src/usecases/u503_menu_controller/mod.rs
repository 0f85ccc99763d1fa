pub mod controller;

pub use controller::{ActiveEdit, CommitOutcome, MenuController, MenuSnapshot};
