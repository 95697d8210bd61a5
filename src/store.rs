//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use category_tree::{CategoryId, CategoryRecord, CategoryStore, ExpansionState, Forest, KindFilter};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::ViewConfig;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest fetched category snapshot
    pub categories: CategoryStore,
    /// Committed (debounced) search text
    pub search: String,
    /// Kind filter
    pub kind: KindFilter,
    /// Open category ids; untouched by search and kind changes
    pub expansion: ExpansionState,
    /// Highlighted category
    pub selected: Option<CategoryId>,
    /// Last fetch/delete error, shown as a banner
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            kind: config.default_kind,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the category snapshot after a fetch
pub fn store_replace_categories(store: &AppStore, records: Vec<CategoryRecord>) {
    let categories = CategoryStore::from_records(records);
    for (child, parent) in categories.dangling_references() {
        log::warn!("[STORE] Category {} lists missing parent {}", child, parent);
    }

    let expansion = store.expansion().get_untracked().retain_known(&categories);
    if store.selected().get_untracked().map_or(false, |id| categories.get(id).is_none()) {
        store.selected().set(None);
    }
    store.expansion().set(expansion);
    store.categories().set(categories);
    store.load_error().set(None);
}

/// Toggle a category open/closed under every placement
pub fn store_toggle_expanded(store: &AppStore, id: CategoryId) {
    let next = store.expansion().get_untracked().toggle(id);
    store.expansion().set(next);
}

pub fn store_expand_all(store: &AppStore, forest: &Forest) {
    store.expansion().set(ExpansionState::expand_all(forest));
}

pub fn store_collapse_all(store: &AppStore) {
    store.expansion().set(ExpansionState::new());
}
