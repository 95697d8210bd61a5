//! UI Components
//!
//! Reusable Leptos components.

mod category_row;
mod category_toolbar;
mod category_tree_view;
mod delete_category_button;
mod kind_selector;

pub use category_row::CategoryRow;
pub use category_toolbar::CategoryToolbar;
pub use category_tree_view::CategoryTreeView;
pub use delete_category_button::DeleteCategoryButton;
pub use kind_selector::{KindSelector, KIND_OPTIONS};
