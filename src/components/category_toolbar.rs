//! Category Toolbar Component
//!
//! Debounced search input, kind selector and expand/collapse controls.

use category_tree::{Forest, KindFilter};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::KindSelector;
use crate::context::use_app_context;
use crate::store::{store_collapse_all, store_expand_all, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryToolbar(forest: Memo<Forest>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let debounce_ms = ctx.search_debounce_ms();

    // Text as typed; committed to the store once typing pauses
    let (draft, set_draft) = signal(store.search().get_untracked());
    let generation = StoredValue::new(0u32);

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_draft.set(value.clone());

        generation.update_value(|g| *g = g.wrapping_add(1));
        let ticket = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if generation.get_value() == ticket {
                log::debug!("[TOOLBAR] Search committed: {:?}", value);
                store.search().set(value);
            }
        });
    };

    let clear_search = move |_| {
        generation.update_value(|g| *g = g.wrapping_add(1));
        set_draft.set(String::new());
        store.search().set(String::new());
    };

    let set_kind = move |kind: KindFilter| store.kind().set(kind);

    view! {
        <div class="category-toolbar">
            <div class="search-box">
                <input
                    type="text"
                    placeholder="Search categories..."
                    prop:value=move || draft.get()
                    on:input=on_input
                />
                <Show when=move || !draft.get().is_empty()>
                    <button class="search-clear-btn" on:click=clear_search>"×"</button>
                </Show>
            </div>

            <KindSelector
                current=Signal::derive(move || store.kind().get())
                on_change=set_kind
            />

            <div class="tree-actions">
                <button
                    class="expand-all-btn"
                    on:click=move |_| forest.with(|forest| store_expand_all(&store, forest))
                >
                    "Expand all"
                </button>
                <button class="collapse-all-btn" on:click=move |_| store_collapse_all(&store)>
                    "Collapse all"
                </button>
            </div>
        </div>
    }
}
