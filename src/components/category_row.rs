//! Category Row Component
//!
//! One placement of a category in the tree.

use category_tree::TreeRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteCategoryButton;
use crate::context::use_app_context;
use crate::store::{store_toggle_expanded, use_app_store, AppStateStoreFields};
use crate::tree::{also_under_label, highlight_segments};

/// A single category row in the tree
#[component]
pub fn CategoryRow(row: TreeRow) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = row.category_id();
    let is_open = row.is_open;
    let has_children = row.has_children;
    let name = row.record.name.clone();
    let short_description = row.record.short_description.clone();
    let kind_label = if row.record.is_sub_category { "sub" } else { "parent" };
    let indent = row.depth * ctx.indent_px();
    let parent_count = store.categories().with_untracked(|categories| categories.parents_of(id).len());
    // Parent names can change on reload without this row's key changing
    let also_under = move || store.categories().with(|categories| also_under_label(categories, &row));
    let (deleting, set_deleting) = signal(false);
    let delete_name = name.clone();

    let is_selected = move || store.selected().get() == Some(id);
    let row_class = move || if is_selected() { "category-row selected" } else { "category-row" };

    let on_delete = Callback::new(move |_: ()| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            let result = commands::delete_category(&config, id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => {
                    log::info!("[TREE] Deleted category {}", id);
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("[TREE] Failed to delete category {}: {}", id, e);
                    store.load_error().set(Some(e));
                }
            }
        });
    });

    view! {
        <div
            class=row_class
            style=format!("padding-left: {}px;", indent + 8)
            on:click=move |_| store.selected().set(Some(id))
        >
            // Expand/collapse toggle
            {if has_children {
                view! {
                    <button
                        class="category-expand-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store_toggle_expanded(&store, id);
                        }
                    >
                        {if is_open { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="category-expand-placeholder">"·"</span> }.into_any()
            }}

            // Name with search highlight
            <span class="category-name" title=short_description>
                {move || {
                    highlight_segments(&name, &store.search().get())
                        .into_iter()
                        .map(|(segment, is_match)| {
                            if is_match {
                                view! { <mark>{segment}</mark> }.into_any()
                            } else {
                                view! { <span>{segment}</span> }.into_any()
                            }
                        })
                        .collect_view()
                }}
            </span>

            <span class=format!("category-kind-badge {}", kind_label)>{kind_label}</span>

            {move || also_under().map(|label| view! { <span class="category-also-under">{label}</span> })}

            <DeleteCategoryButton
                category_name=delete_name
                parent_count=parent_count
                pending=deleting
                on_confirm=on_delete
            />
        </div>
    }
}
