//! Kind Selector Component
//!
//! Buttons for the parent/sub category filter.

use category_tree::KindFilter;
use leptos::prelude::*;

/// Kind filter options
pub const KIND_OPTIONS: &[(KindFilter, &str)] = &[
    (KindFilter::All, "All"),
    (KindFilter::Parent, "Parent"),
    (KindFilter::Sub, "Sub"),
];

/// Kind selector buttons
#[component]
pub fn KindSelector(
    #[prop(into)] current: Signal<KindFilter>,
    on_change: impl Fn(KindFilter) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="kind-selector">
            {KIND_OPTIONS.iter().map(|&(kind, label)| {
                let is_selected = move || current.get() == kind;
                view! {
                    <button
                        class=move || if is_selected() { "kind-btn active" } else { "kind-btn" }
                        on:click=move |_| on_change(kind)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
