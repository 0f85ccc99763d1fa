pub mod submission;
pub mod webhook;

pub use submission::{EditSubmission, SubmissionReceipt};
pub use webhook::{MenuWebhook, WebhookResponse};
