//! Search / Kind Filter
//!
//! Recursive pruning of a category forest. A node survives when it matches
//! the query and kind itself, or when any descendant does; surviving nodes
//! carry only their surviving children, in original order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::forest::{Forest, NodeId};
use crate::record::CategoryRecord;
use crate::walk::ActivePath;

/// Which kind of category to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    /// Top-level categories only (`is_sub_category == false`)
    Parent,
    /// Sub-categories only
    Sub,
}

impl KindFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Parent => "parent",
            KindFilter::Sub => "sub",
        }
    }

    /// Lenient parse: anything unrecognized means `All`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "parent" => KindFilter::Parent,
            "sub" => KindFilter::Sub,
            _ => KindFilter::All,
        }
    }

    pub fn admits(&self, record: &CategoryRecord) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Parent => !record.is_sub_category,
            KindFilter::Sub => record.is_sub_category,
        }
    }
}

impl FromStr for KindFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KindFilter::parse(s))
    }
}

/// Normalized query plus kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryFilter {
    needle: String,
    kind: KindFilter,
}

impl CategoryFilter {
    pub fn new(query: &str, kind: KindFilter) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
            kind,
        }
    }

    pub fn kind(&self) -> KindFilter {
        self.kind
    }

    /// True when every record matches
    pub fn is_passthrough(&self) -> bool {
        self.needle.is_empty() && self.kind == KindFilter::All
    }

    /// Direct match: kind admits the record and the query is a
    /// case-insensitive substring of name or either description.
    pub fn matches(&self, record: &CategoryRecord) -> bool {
        if !self.kind.admits(record) {
            return false;
        }
        if self.needle.is_empty() {
            return true;
        }
        [&record.name, &record.short_description, &record.long_description]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Filter `forest` by `query` and `kind` into a new forest.
pub fn filter_forest(forest: &Forest, query: &str, kind: KindFilter) -> Forest {
    apply_filter(forest, &CategoryFilter::new(query, kind))
}

/// Same as [`filter_forest`] with a prepared filter
pub fn apply_filter(forest: &Forest, filter: &CategoryFilter) -> Forest {
    let mut out = Forest::new();
    let mut path = ActivePath::default();
    for &root in forest.roots() {
        if let Some(kept) = filter_node(forest, root, filter, &mut path, &mut out) {
            out.push_root(kept);
        }
    }
    log::debug!(
        "filtered category forest: {} of {} roots kept",
        out.roots().len(),
        forest.roots().len()
    );
    out
}

fn filter_node(
    src: &Forest,
    node: NodeId,
    filter: &CategoryFilter,
    path: &mut ActivePath,
    out: &mut Forest,
) -> Option<NodeId> {
    let record = src.node(node).shared_record();
    // Re-entering an id already on this path counts as no match
    if !path.enter(record.id) {
        return None;
    }

    let children: Vec<NodeId> = src
        .children(node)
        .iter()
        .filter_map(|&child| filter_node(src, child, filter, path, out))
        .collect();
    path.leave();

    if filter.matches(record) || !children.is_empty() {
        Some(out.push_node(record.clone(), children))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count_nodes;
    use crate::forest::build_forest;

    fn grocery() -> Forest {
        build_forest(&[
            CategoryRecord::new(1, "Fruit").with_descriptions("Fresh produce", ""),
            CategoryRecord::new(2, "Dairy"),
            CategoryRecord::new_sub(3, "Apples", vec![1]),
            CategoryRecord::new_sub(4, "Granny Smith", vec![3])
                .with_descriptions("", "Tart green apple"),
            CategoryRecord::new_sub(5, "Pears", vec![1]),
            CategoryRecord::new_sub(6, "Cheese", vec![2]),
        ])
    }

    fn ids(forest: &Forest) -> Vec<(u32, Vec<u32>)> {
        let mut out = Vec::new();
        crate::walk::walk(forest, |visit| {
            out.push((visit.record.id, forest.child_ids(visit.node)));
            true
        });
        out
    }

    #[test]
    fn test_kind_parse_is_lenient() {
        assert_eq!(KindFilter::parse("Parent"), KindFilter::Parent);
        assert_eq!(KindFilter::parse(" sub "), KindFilter::Sub);
        assert_eq!(KindFilter::parse(""), KindFilter::All);
        assert_eq!("bogus".parse::<KindFilter>().unwrap(), KindFilter::All);
    }

    #[test]
    fn test_passthrough_keeps_structure() {
        let forest = grocery();
        let filtered = filter_forest(&forest, "", KindFilter::All);

        assert_eq!(ids(&filtered), ids(&forest));
        assert_eq!(count_nodes(&filtered), count_nodes(&forest));
        assert!(CategoryFilter::new("  ", KindFilter::All).is_passthrough());
    }

    #[test]
    fn test_query_is_case_insensitive_and_keeps_ancestors() {
        let filtered = filter_forest(&grocery(), "GRANNY", KindFilter::All);
        assert_eq!(ids(&filtered), vec![(1, vec![3]), (3, vec![4]), (4, vec![])]);
    }

    #[test]
    fn test_query_searches_descriptions() {
        let filtered = filter_forest(&grocery(), "tart green", KindFilter::All);
        assert_eq!(filtered.root_ids(), vec![1]);

        let filtered = filter_forest(&grocery(), "produce", KindFilter::All);
        // Fruit matches directly, its non-matching children are pruned
        assert_eq!(ids(&filtered), vec![(1, vec![])]);
    }

    #[test]
    fn test_sub_kind_keeps_parent_path() {
        let filtered = filter_forest(&grocery(), "", KindFilter::Sub);
        // Roots are not sub-categories but survive through their children
        assert_eq!(filtered.root_ids(), vec![1, 2]);
        assert_eq!(count_nodes(&filtered), 6);
    }

    #[test]
    fn test_parent_kind_drops_children() {
        let filtered = filter_forest(&grocery(), "", KindFilter::Parent);
        assert_eq!(ids(&filtered), vec![(1, vec![]), (2, vec![])]);
    }

    #[test]
    fn test_no_match_gives_empty_forest() {
        let filtered = filter_forest(&grocery(), "bread", KindFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_input_is_untouched() {
        let forest = grocery();
        let before = forest.clone();
        let _ = filter_forest(&forest, "cheese", KindFilter::Sub);
        assert_eq!(forest, before);
    }

    #[test]
    fn test_mutual_parents_terminate() {
        let forest = build_forest(&[
            CategoryRecord::new(1, "Root"),
            CategoryRecord::new_sub(2, "A", vec![1, 3]),
            CategoryRecord::new_sub(3, "B", vec![2]),
        ]);
        let filtered = filter_forest(&forest, "b", KindFilter::All);
        assert_eq!(ids(&filtered), vec![(1, vec![2]), (2, vec![3]), (3, vec![])]);
    }
}
