//! Category Admin Frontend App
//!
//! Category hierarchy screen: toolbar, tree and status line.

use category_tree::{filter_forest, visible_rows, Forest, TreeCounts, TreeRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{CategoryToolbar, CategoryTreeView};
use crate::config::ViewConfig;
use crate::context::AppContext;
use crate::store::{store_replace_categories, AppState, AppStateStoreFields};

#[component]
pub fn App(config: ViewConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new(&config));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load categories on mount and whenever a mutation asks for a reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let config = ctx.config();
        log::info!("[APP] Loading categories, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_categories(&config).await {
                Ok(records) => {
                    log::info!("[APP] Loaded {} categories", records.len());
                    store_replace_categories(&store, records);
                }
                Err(e) => {
                    log::error!("[APP] Failed to load categories: {}", e);
                    store.load_error().set(Some(e));
                }
            }
        });
    });

    // Derived tree: snapshot -> forest -> filtered forest -> rows
    let forest: Memo<Forest> = Memo::new(move |_| store.categories().with(|categories| categories.forest()));
    let filtered: Memo<Forest> = Memo::new(move |_| {
        let query = store.search().get();
        let kind = store.kind().get();
        forest.with(|forest| filter_forest(forest, &query, kind))
    });
    let rows: Memo<Vec<TreeRow>> = Memo::new(move |_| {
        let expansion = store.expansion().get();
        filtered.with(|filtered| visible_rows(filtered, &expansion))
    });
    let counts: Memo<TreeCounts> = Memo::new(move |_| {
        filtered.with(|filtered| forest.with(|forest| TreeCounts::new(filtered, forest)))
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Categories"</h1>

                <Show when=move || store.load_error().with(|e| e.is_some())>
                    <div class="error-banner">
                        {move || store.load_error().get().unwrap_or_default()}
                        <button class="error-dismiss-btn" on:click=move |_| store.load_error().set(None)>"×"</button>
                    </div>
                </Show>

                <CategoryToolbar forest=forest />

                <CategoryTreeView rows=rows />

                <p class="category-count">
                    {move || format!("{} categories ({} records)", counts.get(), store.categories().with(|c| c.len()))}
                </p>
            </main>
        </div>
    }
}
