use futures::future::join;
use std::cell::RefCell;
use std::rc::Rc;

use super::source::MenuSource;
use crate::domain::a001_food_item::{FoodItem, FoodItemId, FoodItemPatch};
use crate::domain::a002_category::CategorySet;
use crate::shared::error::{MenuError, MenuResult};

/// Load lifecycle of the store.
///
/// `Idle -> Loading -> Ready | Failed`, and `Failed -> Loading` on retry.
/// `load` is a no-op while `Loading` or `Ready`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct StoreState {
    load: LoadState,
    items: Vec<FoodItem>,
    categories: CategorySet,
    revision: u64,
}

/// In-memory copy of the menu, filled once from the remote sheet and
/// afterwards changed only by local add/update.
///
/// Methods take `&self`; the state borrow is never held across an await,
/// so the store can be shared with `Rc` on a single-threaded executor.
pub struct MenuDataStore {
    source: Rc<dyn MenuSource>,
    state: RefCell<StoreState>,
}

impl MenuDataStore {
    pub fn new(source: Rc<dyn MenuSource>) -> Self {
        Self {
            source,
            state: RefCell::new(StoreState {
                load: LoadState::Idle,
                items: Vec::new(),
                categories: CategorySet::default(),
                revision: 0,
            }),
        }
    }

    /// Fetch items and categories concurrently. Both must succeed.
    pub async fn load(&self) -> MenuResult<()> {
        {
            let mut state = self.state.borrow_mut();
            match state.load {
                LoadState::Loading | LoadState::Ready => {
                    log::debug!("menu load skipped, state is {:?}", state.load);
                    return Ok(());
                }
                LoadState::Idle | LoadState::Failed(_) => state.load = LoadState::Loading,
            }
        }

        let (items, categories) =
            join(self.source.fetch_items(), self.source.fetch_categories()).await;

        let mut state = self.state.borrow_mut();
        match (items, categories) {
            (Ok(items), Ok(categories)) => {
                log::info!(
                    "menu loaded: {} items, {} categories",
                    items.len(),
                    categories.len()
                );
                state.items = items;
                state.categories = CategorySet::from_remote(categories);
                state.revision += 1;
                state.load = LoadState::Ready;
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => {
                let err = match err {
                    MenuError::FetchFailed(_) => err,
                    other => MenuError::FetchFailed(other.to_string()),
                };
                log::warn!("menu load failed: {}", err);
                state.load = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Forget the previous load and fetch again. Ignored while a load is
    /// already in flight.
    pub async fn retry(&self) -> MenuResult<()> {
        {
            let mut state = self.state.borrow_mut();
            if state.load.is_loading() {
                log::debug!("menu retry skipped, load in flight");
                return Ok(());
            }
            state.load = LoadState::Idle;
        }
        self.load().await
    }

    /// Append an item; its category joins the category list when new.
    pub fn add_item(&self, item: FoodItem) {
        let mut state = self.state.borrow_mut();
        let category = item.category.clone();
        state.items.push(item);
        state.categories.insert(&category);
        state.revision += 1;
    }

    /// Patch the item with the given id. Returns `false` when none matches.
    pub fn update_item(&self, id: &FoodItemId, patch: &FoodItemPatch) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(item) = state.items.iter_mut().find(|item| &item.id == id) else {
            log::debug!("update skipped, no item with id {}", id);
            return false;
        };
        item.apply(patch);
        state.revision += 1;
        true
    }

    pub fn load_state(&self) -> LoadState {
        self.state.borrow().load.clone()
    }

    pub fn items(&self) -> Vec<FoodItem> {
        self.state.borrow().items.clone()
    }

    pub fn categories(&self) -> CategorySet {
        self.state.borrow().categories.clone()
    }

    /// Bumped on every change of the collection.
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    /// Run `f` against the current items without cloning them.
    pub fn with_items<R>(&self, f: impl FnOnce(&[FoodItem]) -> R) -> R {
        f(&self.state.borrow().items)
    }
}
