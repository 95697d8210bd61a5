//! Category Forest
//!
//! Arena-backed forest of category nodes built from the flat record list.
//!
//! A built forest holds exactly one node per record. A sub-category with
//! several parents has its single node handle pushed onto every parent's
//! children list, so every placement sees the same children. Filtered forests
//! use the same type but hold one fresh node per retained placement.

use std::collections::HashMap;
use std::sync::Arc;

use crate::record::{CategoryId, CategoryRecord};

/// Handle to a node inside one [`Forest`]'s arena.
///
/// Only meaningful for the forest that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A category placed in a forest with its ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    record: Arc<CategoryRecord>,
    children: Vec<NodeId>,
}

impl TreeNode {
    pub fn record(&self) -> &CategoryRecord {
        &self.record
    }

    /// Shared handle to the underlying record
    pub fn shared_record(&self) -> &Arc<CategoryRecord> {
        &self.record
    }

    pub fn category_id(&self) -> CategoryId {
        self.record.id
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Ordered roots plus the node arena they point into
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_node(&mut self, record: Arc<CategoryRecord>, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode { record, children });
        id
    }

    pub(crate) fn push_root(&mut self, node: NodeId) {
        self.roots.push(node);
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Panics if `id` came from a different forest.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Non-panicking [`node`](Self::node), `None` for an id outside this arena
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn record(&self, id: NodeId) -> &CategoryRecord {
        self.node(id).record()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of distinct nodes in the arena.
    ///
    /// For a built forest this is the number of records; use
    /// [`crate::count_nodes`] for the number of placements.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// First node wrapping `category`, if any
    pub fn find(&self, category: CategoryId) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.category_id() == category)
            .map(NodeId)
    }

    pub fn root_ids(&self) -> Vec<CategoryId> {
        self.roots.iter().map(|&root| self.record(root).id).collect()
    }

    /// Category ids of a node's direct children, in order
    pub fn child_ids(&self, id: NodeId) -> Vec<CategoryId> {
        self.children(id)
            .iter()
            .map(|&child| self.record(child).id)
            .collect()
    }
}

/// Build a forest from the flat record list.
///
/// Roots keep input order. Children under each parent keep the input order of
/// the child records. Parent ids that do not resolve are skipped; a record whose
/// every parent is unknown ends up unreachable.
///
/// A parent id listed twice yields a single placement under that parent, so
/// every placement path in the forest is unique.
pub fn build_forest(records: &[CategoryRecord]) -> Forest {
    build_from_shared(records.iter().cloned().map(Arc::new))
}

pub(crate) fn build_from_shared<I>(records: I) -> Forest
where
    I: IntoIterator<Item = Arc<CategoryRecord>>,
{
    let mut forest = Forest::new();
    let mut lookup: HashMap<CategoryId, NodeId> = HashMap::new();
    let mut placed: Vec<NodeId> = Vec::new();

    // One node per record, keyed by id
    for record in records {
        if lookup.contains_key(&record.id) {
            log::warn!("duplicate category id {}, keeping first occurrence", record.id);
            continue;
        }
        let id = record.id;
        let node = forest.push_node(record, Vec::new());
        lookup.insert(id, node);
        placed.push(node);
    }

    for &node in &placed {
        if forest.record(node).is_root() {
            forest.push_root(node);
        }
    }

    let mut dangling = 0usize;
    for &node in &placed {
        let child = forest.nodes[node.0].record.clone();
        for parent_id in child.placement_parents() {
            match lookup.get(&parent_id) {
                Some(&parent) => forest.nodes[parent.0].children.push(node),
                None => {
                    dangling += 1;
                    log::debug!("category {} names unknown parent {}", child.id, parent_id);
                }
            }
        }
    }

    log::debug!(
        "built category forest: {} records, {} roots, {} dangling parent refs",
        placed.len(),
        forest.roots.len(),
        dangling
    );
    forest
}
