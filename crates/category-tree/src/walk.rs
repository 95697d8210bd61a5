//! Forest Traversal
//!
//! Cycle-safe depth-first walk shared by counting, row flattening and
//! expansion helpers. Parent chains in the data may loop (A under B, B under
//! A); the walk tracks the ids on the current path and never re-enters one.

use std::collections::HashSet;
use std::sync::Arc;

use crate::expansion::ExpansionState;
use crate::forest::{Forest, NodeId};
use crate::record::{CategoryId, CategoryRecord};

/// Ids on the path from a root to the node being visited
#[derive(Debug, Default)]
pub(crate) struct ActivePath {
    ids: Vec<CategoryId>,
    members: HashSet<CategoryId>,
}

impl ActivePath {
    /// Push `id`; returns false if it is already on the path.
    pub(crate) fn enter(&mut self, id: CategoryId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub(crate) fn leave(&mut self) {
        if let Some(id) = self.ids.pop() {
            self.members.remove(&id);
        }
    }

    pub(crate) fn contains(&self, id: CategoryId) -> bool {
        self.members.contains(&id)
    }

    pub(crate) fn ids(&self) -> &[CategoryId] {
        &self.ids
    }
}

/// One step of a [`walk`]
#[derive(Debug)]
pub struct Visit<'a> {
    pub node: NodeId,
    pub record: &'a CategoryRecord,
    pub depth: usize,
    /// Category ids from the root down to and including this node
    pub path: &'a [CategoryId],
    /// Whether at least one child would be visited on descent
    pub has_children: bool,
}

/// Pre-order depth-first walk over every placement in the forest.
///
/// `visit` returns whether to descend into the node's children.
pub fn walk<F>(forest: &Forest, mut visit: F)
where
    F: FnMut(&Visit<'_>) -> bool,
{
    let mut path = ActivePath::default();
    for &root in forest.roots() {
        walk_node(forest, root, 0, &mut path, &mut visit);
    }
}

fn walk_node<F>(forest: &Forest, node: NodeId, depth: usize, path: &mut ActivePath, visit: &mut F)
where
    F: FnMut(&Visit<'_>) -> bool,
{
    let record = forest.record(node);
    if !path.enter(record.id) {
        return;
    }

    let has_children = forest
        .children(node)
        .iter()
        .any(|&child| !path.contains(forest.record(child).id));
    let descend = visit(&Visit {
        node,
        record,
        depth,
        path: path.ids(),
        has_children,
    });

    if descend {
        for &child in forest.children(node) {
            walk_node(forest, child, depth + 1, path, visit);
        }
    }
    path.leave();
}

/// A rendered row: one placement of a category
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub node: NodeId,
    pub record: Arc<CategoryRecord>,
    pub depth: usize,
    /// Category ids from the root; unique per placement
    pub path: Vec<CategoryId>,
    pub has_children: bool,
    pub is_open: bool,
}

impl TreeRow {
    pub fn category_id(&self) -> CategoryId {
        self.record.id
    }

    /// Stable key for keyed list rendering, e.g. `"1/4/9"`
    pub fn key(&self) -> String {
        self.path
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Flatten the forest into display rows.
///
/// A node's children are listed only when its category id is open.
pub fn visible_rows(forest: &Forest, expansion: &ExpansionState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    walk(forest, |visit| {
        let is_open = expansion.is_open(visit.record.id);
        rows.push(TreeRow {
            node: visit.node,
            record: forest.node(visit.node).shared_record().clone(),
            depth: visit.depth,
            path: visit.path.to_vec(),
            has_children: visit.has_children,
            is_open,
        });
        is_open
    });
    rows
}
