//! Category Tree View Component
//!
//! Renders the filtered forest as a flat, keyed list of placement rows.

use category_tree::TreeRow;
use leptos::prelude::*;

use crate::components::CategoryRow;

/// Category tree view component
#[component]
pub fn CategoryTreeView(rows: Memo<Vec<TreeRow>>) -> impl IntoView {
    view! {
        <div class="category-tree">
            <For
                each=move || rows.get()
                key=|row| {
                    // Placement path plus every field the row renders
                    (
                        row.key(),
                        row.is_open,
                        row.has_children,
                        row.record.name.clone(),
                        row.record.is_sub_category,
                        row.record.updated_at,
                    )
                }
                children=move |row| view! { <CategoryRow row=row /> }
            />

            <Show when=move || rows.with(|rows| rows.is_empty())>
                <div class="no-categories-message">"No categories to show"</div>
            </Show>
        </div>
    }
}
