//! In-memory doubles for the core's collaborators.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};

use crate::domain::a001_food_item::{FoodItem, FoodItemId};
use crate::shared::error::{MenuError, MenuResult};
use crate::shared::notifications::{Notice, Notifier};
use crate::system::auth::AuthSession;
use crate::usecases::u501_menu_data::MenuSource;
use crate::usecases::u502_edit_submission::{MenuWebhook, WebhookResponse};

pub fn food(id: &str, title: &str, category: &str) -> FoodItem {
    FoodItem {
        id: FoodItemId::from(id),
        title: title.into(),
        description: format!("{} description", title),
        category: category.into(),
        price: 40.0,
        rating: 4.2,
        image: "http://x/y.png".into(),
        is_veg: true,
    }
}

pub struct MockSource {
    items: Vec<FoodItem>,
    categories: Vec<String>,
    items_status: Cell<Option<u16>>,
    categories_status: Cell<Option<u16>>,
    item_calls: Cell<usize>,
    category_calls: Cell<usize>,
    deferred: Cell<bool>,
}

impl MockSource {
    pub fn new(items: Vec<FoodItem>, categories: Vec<String>) -> Self {
        Self {
            items,
            categories,
            items_status: Cell::new(None),
            categories_status: Cell::new(None),
            item_calls: Cell::new(0),
            category_calls: Cell::new(0),
            deferred: Cell::new(false),
        }
    }

    /// Yield to the executor once before answering, so a request stays
    /// pending while other futures run.
    pub fn defer_answers(&self) {
        self.deferred.set(true);
    }

    pub fn fail_items_with(&self, status: u16) {
        self.items_status.set(Some(status));
    }

    pub fn fail_categories_with(&self, status: u16) {
        self.categories_status.set(Some(status));
    }

    pub fn recover(&self) {
        self.items_status.set(None);
        self.categories_status.set(None);
    }

    pub fn item_calls(&self) -> usize {
        self.item_calls.get()
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.get()
    }
}

#[async_trait(?Send)]
impl MenuSource for MockSource {
    async fn fetch_items(&self) -> MenuResult<Vec<FoodItem>> {
        self.item_calls.set(self.item_calls.get() + 1);
        if self.deferred.get() {
            tokio::task::yield_now().await;
        }
        match self.items_status.get() {
            Some(status) => Err(MenuError::FetchFailed(format!("HTTP {}", status))),
            None => Ok(self.items.clone()),
        }
    }

    async fn fetch_categories(&self) -> MenuResult<Vec<String>> {
        self.category_calls.set(self.category_calls.get() + 1);
        if self.deferred.get() {
            tokio::task::yield_now().await;
        }
        match self.categories_status.get() {
            Some(status) => Err(MenuError::FetchFailed(format!("HTTP {}", status))),
            None => Ok(self.categories.clone()),
        }
    }
}

/// Webhook double answering with a fixed status, or failing at the network
/// layer when `status` is `None`.
pub struct MockWebhook {
    status: Cell<Option<u16>>,
    body: RefCell<String>,
    urls: RefCell<Vec<String>>,
    deferred: Cell<bool>,
}

impl MockWebhook {
    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            status: Cell::new(Some(status)),
            body: RefCell::new(body.to_string()),
            urls: RefCell::new(Vec::new()),
            deferred: Cell::new(false),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: Cell::new(None),
            body: RefCell::new(String::new()),
            urls: RefCell::new(Vec::new()),
            deferred: Cell::new(false),
        }
    }

    /// Yield to the executor once before answering.
    pub fn defer_answers(&self) {
        self.deferred.set(true);
    }

    pub fn set_status(&self, status: u16) {
        self.status.set(Some(status));
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl MenuWebhook for MockWebhook {
    async fn get(&self, url: &str) -> MenuResult<WebhookResponse> {
        self.urls.borrow_mut().push(url.to_string());
        if self.deferred.get() {
            tokio::task::yield_now().await;
        }
        match self.status.get() {
            Some(status) => Ok(WebhookResponse {
                status,
                body: self.body.borrow().clone(),
            }),
            None => Err(MenuError::SubmissionFailed("network error".into())),
        }
    }
}

pub struct MockSession {
    authenticated: bool,
    redirects: Cell<usize>,
}

impl MockSession {
    pub fn signed_in() -> Self {
        Self {
            authenticated: true,
            redirects: Cell::new(0),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            authenticated: false,
            redirects: Cell::new(0),
        }
    }

    pub fn redirects(&self) -> usize {
        self.redirects.get()
    }
}

impl AuthSession for MockSession {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn redirect_to_login(&self) {
        self.redirects.set(self.redirects.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
