use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::a001_food_item::{EditMode, FoodItem, FoodItemDraft, FoodItemId};
use crate::shared::error::MenuError;
use crate::shared::filter::{FilterCriteria, FilterView};
use crate::shared::id_allocator;
use crate::system::auth::AuthSession;
use crate::usecases::u501_menu_data::{LoadState, MenuDataStore};
use crate::usecases::u502_edit_submission::{EditSubmission, SubmissionReceipt};

/// Form currently open on the menu page.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdit {
    pub mode: EditMode,
    /// Id of the item being edited; `None` when creating.
    pub original_id: Option<FoodItemId>,
    pub draft: FoodItemDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Sent and merged into the local collection.
    Committed(SubmissionReceipt),
    /// Nothing was merged; the form stays open.
    Rejected(MenuError),
    /// No form was open.
    Ignored,
}

/// Everything the menu page renders, captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSnapshot {
    pub items: Vec<FoodItem>,
    pub filtered_items: Vec<FoodItem>,
    pub categories: Vec<String>,
    pub criteria: FilterCriteria,
    pub load_state: LoadState,
    pub loading: bool,
    pub error: Option<String>,
    pub next_id: FoodItemId,
    pub active_edit: Option<ActiveEdit>,
    pub submitting: bool,
}

#[derive(Default)]
struct UiState {
    criteria: FilterCriteria,
    active_edit: Option<ActiveEdit>,
    error: Option<String>,
    filter_view: FilterView,
}

/// Operations of the menu page on top of the store, the filter and the
/// webhook submission. Makes no network calls of its own.
pub struct MenuController {
    store: MenuDataStore,
    submission: EditSubmission,
    session: Rc<dyn AuthSession>,
    ui: RefCell<UiState>,
}

impl MenuController {
    pub fn new(store: MenuDataStore, submission: EditSubmission, session: Rc<dyn AuthSession>) -> Self {
        Self {
            store,
            submission,
            session,
            ui: RefCell::new(UiState::default()),
        }
    }

    /// First load of the page. Operators without a session are sent to the
    /// login page and nothing is fetched.
    pub async fn initialize(&self) {
        if !self.session.is_authenticated() {
            log::info!("no session, redirecting to login");
            self.session.redirect_to_login();
            return;
        }
        // Failure is kept in the store's load state.
        let _ = self.store.load().await;
    }

    pub async fn retry_load(&self) {
        self.ui.borrow_mut().error = None;
        let _ = self.store.retry().await;
    }

    pub fn search(&self, term: impl Into<String>) {
        self.ui.borrow_mut().criteria.search_term = term.into();
    }

    pub fn select_category(&self, name: impl Into<String>) {
        self.ui.borrow_mut().criteria.selected_category = name.into();
    }

    pub fn begin_add(&self) {
        let draft = FoodItemDraft::for_create(self.next_id());
        let mut ui = self.ui.borrow_mut();
        ui.error = None;
        ui.active_edit = Some(ActiveEdit {
            mode: EditMode::Create,
            original_id: None,
            draft,
        });
    }

    pub fn begin_edit(&self, item: &FoodItem) {
        let mut ui = self.ui.borrow_mut();
        ui.error = None;
        ui.active_edit = Some(ActiveEdit {
            mode: EditMode::Update,
            original_id: Some(item.id.clone()),
            draft: FoodItemDraft::from_item(item),
        });
    }

    pub fn cancel_edit(&self) {
        let mut ui = self.ui.borrow_mut();
        ui.active_edit = None;
        ui.error = None;
    }

    /// Submit the open form and merge the accepted payload locally.
    pub async fn commit_edit(&self, payload: FoodItemDraft) -> CommitOutcome {
        let Some(edit) = self.ui.borrow().active_edit.clone() else {
            log::debug!("commit ignored, no form open");
            return CommitOutcome::Ignored;
        };

        let mut payload = payload;
        if let Some(original_id) = &edit.original_id {
            // The id field is read-only while editing.
            payload.id = original_id.clone();
        }

        match self.submission.submit(&payload, edit.mode).await {
            Ok(receipt) => {
                match receipt.mode {
                    EditMode::Create => self.store.add_item(receipt.draft.to_item()),
                    EditMode::Update => {
                        self.store
                            .update_item(&receipt.draft.id, &receipt.draft.to_patch());
                    }
                }
                let mut ui = self.ui.borrow_mut();
                ui.active_edit = None;
                ui.error = None;
                CommitOutcome::Committed(receipt)
            }
            Err(MenuError::SubmissionInFlight) => {
                CommitOutcome::Rejected(MenuError::SubmissionInFlight)
            }
            Err(err) => {
                let mut ui = self.ui.borrow_mut();
                ui.error = Some(err.to_string());
                if let Some(active) = ui.active_edit.as_mut() {
                    active.draft = payload;
                }
                CommitOutcome::Rejected(err)
            }
        }
    }

    pub fn items(&self) -> Vec<FoodItem> {
        self.store.items()
    }

    pub fn filtered_items(&self) -> Vec<FoodItem> {
        let revision = self.store.revision();
        let mut ui = self.ui.borrow_mut();
        let UiState {
            criteria,
            filter_view,
            ..
        } = &mut *ui;
        self.store
            .with_items(|items| filter_view.compute(revision, items, criteria).to_vec())
    }

    pub fn categories(&self) -> Vec<String> {
        self.store.categories().as_slice().to_vec()
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.ui.borrow().criteria.clone()
    }

    pub fn loading(&self) -> bool {
        self.store.load_state().is_loading()
    }

    /// Latest edit failure, or the load failure when no edit failed.
    pub fn error(&self) -> Option<String> {
        let ui_error = self.ui.borrow().error.clone();
        ui_error.or_else(|| self.store.load_state().error().map(String::from))
    }

    pub fn next_id(&self) -> FoodItemId {
        self.store.with_items(id_allocator::next_id)
    }

    pub fn active_edit(&self) -> Option<ActiveEdit> {
        self.ui.borrow().active_edit.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_pending()
    }

    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            items: self.items(),
            filtered_items: self.filtered_items(),
            categories: self.categories(),
            criteria: self.criteria(),
            load_state: self.store.load_state(),
            loading: self.loading(),
            error: self.error(),
            next_id: self.next_id(),
            active_edit: self.active_edit(),
            submitting: self.is_submitting(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{food, MockSession, MockSource, MockWebhook, RecordingNotifier};

    struct Fixture {
        source: Rc<MockSource>,
        webhook: Rc<MockWebhook>,
        session: Rc<MockSession>,
        controller: MenuController,
    }

    fn fixture(items: Vec<FoodItem>, categories: &[&str], session: MockSession) -> Fixture {
        let source = Rc::new(MockSource::new(
            items,
            categories.iter().map(|c| c.to_string()).collect(),
        ));
        let webhook = Rc::new(MockWebhook::answering(200, "ok"));
        let session = Rc::new(session);
        let store = MenuDataStore::new(source.clone());
        let submission = EditSubmission::new(
            webhook.clone(),
            Rc::new(RecordingNotifier::default()),
            Some("https://hook.test/exec".into()),
        );
        let controller = MenuController::new(store, submission, session.clone());
        Fixture {
            source,
            webhook,
            session,
            controller,
        }
    }

    fn dosa_form(id: FoodItemId) -> FoodItemDraft {
        FoodItemDraft {
            id,
            name: "Dosa".into(),
            description: "d".into(),
            price: 50.0,
            image: "http://x/y.png".into(),
            rating: 4.0,
            category: "Breakfast".into(),
            is_veg: true,
        }
    }

    #[tokio::test]
    async fn test_signed_out_operator_is_redirected() {
        let f = fixture(vec![], &[], MockSession::signed_out());

        f.controller.initialize().await;

        assert_eq!(f.session.redirects(), 1);
        assert_eq!(f.source.item_calls(), 0);
        assert_eq!(f.controller.snapshot().load_state, LoadState::Idle);
    }

    #[tokio::test]
    async fn test_empty_menu() {
        let f = fixture(vec![], &[], MockSession::signed_in());

        f.controller.initialize().await;
        let snap = f.controller.snapshot();

        assert!(snap.filtered_items.is_empty());
        assert_eq!(snap.next_id.as_str(), "1");
        assert_eq!(snap.categories, vec!["All".to_string()]);
        assert!(!snap.loading);
        assert_eq!(snap.error, None);
    }

    #[tokio::test]
    async fn test_search_then_category() {
        let mut idli = food("1", "Idli", "Breakfast");
        idli.price = 40.0;
        idli.rating = 4.2;
        let f = fixture(vec![idli], &["Breakfast", "Lunch"], MockSession::signed_in());
        f.controller.initialize().await;

        f.controller.search("idl");
        assert_eq!(f.controller.filtered_items().len(), 1);

        f.controller.select_category("Lunch");
        assert_eq!(f.controller.filtered_items().len(), 0);

        f.controller.select_category("All");
        f.controller.search("");
        assert_eq!(f.controller.filtered_items().len(), 1);
    }

    #[tokio::test]
    async fn test_add_uses_precomputed_id() {
        let f = fixture(
            vec![food("1", "Idli", "Breakfast")],
            &["Breakfast"],
            MockSession::signed_in(),
        );
        f.controller.initialize().await;
        let categories_before = f.controller.categories();

        f.controller.begin_add();
        let proposed = f.controller.active_edit().unwrap().draft.id;
        assert_eq!(proposed, f.controller.next_id());

        let outcome = f.controller.commit_edit(dosa_form(proposed.clone())).await;

        assert!(matches!(outcome, CommitOutcome::Committed(_)));
        let items = f.controller.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, proposed);
        assert_eq!(items[1].title, "Dosa");
        assert_eq!(f.controller.categories(), categories_before);
        assert_eq!(f.controller.active_edit(), None);
        assert_eq!(f.webhook.urls().len(), 1);
    }

    #[tokio::test]
    async fn test_add_with_new_category_extends_chips() {
        let f = fixture(vec![], &["Breakfast"], MockSession::signed_in());
        f.controller.initialize().await;

        f.controller.begin_add();
        let mut form = dosa_form(f.controller.next_id());
        form.category = "Desserts".into();
        f.controller.commit_edit(form).await;

        assert_eq!(
            f.controller.categories(),
            vec!["All".to_string(), "Breakfast".into(), "Desserts".into()]
        );
    }

    #[tokio::test]
    async fn test_sequential_adds_keep_ids_unique() {
        let f = fixture(
            vec![food("2", "Idli", "Breakfast"), food("x", "Vada", "Breakfast")],
            &["Breakfast"],
            MockSession::signed_in(),
        );
        f.controller.initialize().await;

        for _ in 0..5 {
            f.controller.begin_add();
            let id = f.controller.active_edit().unwrap().draft.id;
            f.controller.commit_edit(dosa_form(id)).await;
        }

        let mut ids: Vec<String> = f
            .controller
            .items()
            .iter()
            .map(|i| i.id.to_string())
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(total, 7);
    }

    #[tokio::test]
    async fn test_edit_merges_into_existing_item() {
        let f = fixture(
            vec![food("3", "Old", "Mains"), food("4", "Other", "Mains")],
            &["Mains"],
            MockSession::signed_in(),
        );
        f.controller.initialize().await;
        let target = f.controller.items()[0].clone();
        let untouched = f.controller.items()[1].clone();

        f.controller.begin_edit(&target);
        let mut form = f.controller.active_edit().unwrap().draft;
        form.name = "New".into();
        // A tampered id must not redirect the update.
        form.id = "4".into();
        let outcome = f.controller.commit_edit(form).await;

        assert!(matches!(outcome, CommitOutcome::Committed(_)));
        let items = f.controller.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "New");
        assert_eq!(items[0].price, target.price);
        assert_eq!(items[1], untouched);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_form_open() {
        let f = fixture(
            vec![food("1", "Idli", "Breakfast")],
            &["Breakfast"],
            MockSession::signed_in(),
        );
        f.controller.initialize().await;
        f.webhook.set_status(500);
        let before = f.controller.items();

        f.controller.begin_add();
        let outcome = f
            .controller
            .commit_edit(dosa_form(f.controller.next_id()))
            .await;

        assert!(matches!(
            outcome,
            CommitOutcome::Rejected(MenuError::SubmissionFailed(_))
        ));
        let snap = f.controller.snapshot();
        assert!(snap.error.is_some());
        assert!(snap.active_edit.is_some());
        assert_eq!(snap.items, before);
        assert!(!snap.submitting);
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let f = fixture(vec![], &[], MockSession::signed_in());
        f.controller.initialize().await;

        f.controller.begin_add();
        let mut form = dosa_form(f.controller.next_id());
        form.rating = 7.0;
        let outcome = f.controller.commit_edit(form).await;

        assert!(matches!(
            outcome,
            CommitOutcome::Rejected(MenuError::ValidationRejected(_))
        ));
        assert!(f.webhook.urls().is_empty());
        assert!(f.controller.active_edit().is_some());
        assert_eq!(f.controller.active_edit().unwrap().draft.rating, 7.0);
    }

    #[tokio::test]
    async fn test_commit_without_form_is_ignored() {
        let f = fixture(vec![], &[], MockSession::signed_in());
        f.controller.initialize().await;

        let outcome = f.controller.commit_edit(dosa_form("1".into())).await;

        assert_eq!(outcome, CommitOutcome::Ignored);
        assert!(f.webhook.urls().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_clears_form_and_error() {
        let f = fixture(vec![], &[], MockSession::signed_in());
        f.controller.initialize().await;
        f.webhook.set_status(500);

        f.controller.begin_add();
        f.controller
            .commit_edit(dosa_form(f.controller.next_id()))
            .await;
        assert!(f.controller.error().is_some());

        f.controller.cancel_edit();
        assert_eq!(f.controller.active_edit(), None);
        assert_eq!(f.controller.error(), None);
    }

    #[tokio::test]
    async fn test_load_failure_then_retry() {
        let f = fixture(
            vec![food("1", "Idli", "Breakfast")],
            &["Breakfast"],
            MockSession::signed_in(),
        );
        f.source.fail_items_with(500);

        f.controller.initialize().await;
        let snap = f.controller.snapshot();
        assert!(matches!(snap.load_state, LoadState::Failed(_)));
        assert!(snap.error.is_some());

        f.source.recover();
        f.controller.retry_load().await;
        let snap = f.controller.snapshot();
        assert_eq!(snap.load_state, LoadState::Ready);
        assert_eq!(snap.error, None);
        assert_eq!(snap.items.len(), 1);
    }

    #[tokio::test]
    async fn test_initialize_twice_fetches_once() {
        let f = fixture(vec![], &[], MockSession::signed_in());

        f.controller.initialize().await;
        f.controller.initialize().await;

        assert_eq!(f.source.item_calls(), 1);
        assert_eq!(f.source.category_calls(), 1);
    }
}
