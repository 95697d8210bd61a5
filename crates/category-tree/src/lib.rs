//! Category Tree
//!
//! Turns the flat category list from the marketplace API into a forest that
//! can be filtered, counted and rendered.
//!
//! - record: the flat `CategoryRecord` entity
//! - store: immutable snapshot of fetched records
//! - forest: arena forest and `build_forest`
//! - filter: query/kind filtering (`filter_forest`)
//! - walk: cycle-safe traversal and display rows
//! - count: placement counting
//! - expansion: open/closed state keyed by category id

mod count;
mod error;
mod expansion;
mod filter;
mod forest;
mod record;
mod store;
mod walk;

#[cfg(test)]
mod tests;

pub use count::{count_nodes, TreeCounts};
pub use error::{CategoryError, CategoryResult};
pub use expansion::ExpansionState;
pub use filter::{apply_filter, filter_forest, CategoryFilter, KindFilter};
pub use forest::{build_forest, Forest, NodeId, TreeNode};
pub use record::{CategoryId, CategoryRecord};
pub use store::CategoryStore;
pub use walk::{visible_rows, walk, TreeRow, Visit};
