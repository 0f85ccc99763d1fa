use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::webhook::MenuWebhook;
use crate::domain::a001_food_item::{EditMode, FoodItemDraft, WebhookQuery};
use crate::shared::config::MODAL_CLOSE_DELAY;
use crate::shared::error::{MenuError, MenuResult};
use crate::shared::notifications::{Notice, Notifier};

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    /// Validated, whitespace-normalized payload that was sent.
    pub draft: FoodItemDraft,
    pub mode: EditMode,
    /// Delay before the form should be closed.
    pub close_after: Duration,
}

/// Marks the form busy for as long as it lives.
struct PendingGuard<'a>(&'a Cell<bool>);

impl<'a> PendingGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Validates a draft and sends it to the sheet webhook.
///
/// One instance backs one edit form; at most one submission is in flight.
pub struct EditSubmission {
    webhook: Rc<dyn MenuWebhook>,
    notifier: Rc<dyn Notifier>,
    base_url: Option<String>,
    pending: Cell<bool>,
}

impl EditSubmission {
    pub fn new(
        webhook: Rc<dyn MenuWebhook>,
        notifier: Rc<dyn Notifier>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            webhook,
            notifier,
            base_url,
            pending: Cell::new(false),
        }
    }

    /// `true` while a request is outstanding; the submit control stays
    /// disabled meanwhile.
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    pub async fn submit(&self, draft: &FoodItemDraft, mode: EditMode) -> MenuResult<SubmissionReceipt> {
        if self.pending.get() {
            return Err(MenuError::SubmissionInFlight);
        }

        let draft = draft.normalized();
        draft.validate().map_err(MenuError::ValidationRejected)?;

        let _pending = PendingGuard::enter(&self.pending);
        let verb = if mode.is_add() { "create" } else { "update" };

        match self.send(&draft).await {
            Ok(()) => {
                log::info!("item {} {}d via webhook", draft.id, verb);
                let (title, message) = if mode.is_add() {
                    ("Item Created!", format!("{} has been added to the menu successfully.", draft.name))
                } else {
                    ("Item Updated!", format!("{} has been updated in the menu successfully.", draft.name))
                };
                self.notifier.notify(Notice::success(title, message));
                Ok(SubmissionReceipt {
                    draft,
                    mode,
                    close_after: MODAL_CLOSE_DELAY,
                })
            }
            Err(err) => {
                log::warn!("failed to {} item {}: {}", verb, draft.id, err);
                self.notifier.notify(Notice::error(
                    "Operation Failed",
                    format!("Failed to {} {}. Please try again. ({})", verb, draft.name, err),
                ));
                Err(err)
            }
        }
    }

    async fn send(&self, draft: &FoodItemDraft) -> MenuResult<()> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| MenuError::SubmissionFailed("Webhook URL not configured".into()))?;

        let url = WebhookQuery::from(draft)
            .to_url(base_url)
            .map_err(|e| MenuError::SubmissionFailed(format!("Failed to encode query: {}", e)))?;
        log::debug!("webhook url: {}", url);

        let response = self.webhook.get(&url).await.map_err(|err| match err {
            MenuError::SubmissionFailed(_) => err,
            other => MenuError::SubmissionFailed(other.to_string()),
        })?;

        if !response.is_ok() {
            return Err(MenuError::SubmissionFailed(format!(
                "HTTP error! status: {}, message: {}",
                response.status, response.body
            )));
        }

        log::debug!("webhook answered: {}", response.payload());
        Ok(())
    }
}
