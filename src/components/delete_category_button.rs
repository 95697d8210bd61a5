//! Delete Category Button Component
//!
//! Inline delete with a confirmation naming the category. Confirmation stays
//! disabled while the DELETE request is in flight.

use leptos::prelude::*;

use crate::tree::delete_prompt;

#[component]
pub fn DeleteCategoryButton(
    category_name: String,
    /// Number of parents the category is placed under
    parent_count: usize,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = delete_prompt(&category_name, parent_count);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="delete-btn"
                title="Delete category"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class=move || if pending.get() { "delete-confirm pending" } else { "delete-confirm" }>
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    disabled=move || pending.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if !pending.get_untracked() {
                            on_confirm.run(());
                        }
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    disabled=move || pending.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
