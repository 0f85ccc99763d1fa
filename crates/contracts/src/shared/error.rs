use thiserror::Error;

use crate::domain::a001_food_item::DraftViolation;

/// Failures of the menu core.
///
/// None of them is fatal: each one leaves the store or the edit form in a
/// state the operator can retry from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// A read endpoint answered non-OK or could not be reached.
    #[error("Failed to load menu data: {0}")]
    FetchFailed(String),

    /// The webhook answered non-OK, could not be reached, or is not configured.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// A form field broke its constraint; nothing was sent.
    #[error("Invalid form data: {0}")]
    ValidationRejected(DraftViolation),

    /// A submission from the same form is still pending.
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

pub type MenuResult<T> = Result<T, MenuError>;
