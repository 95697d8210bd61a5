//! Placement Counter
//!
//! Counts rows the way a fully expanded renderer would list them.

use std::fmt;

use crate::forest::Forest;
use crate::walk::walk;

/// Number of placements in `forest`.
///
/// A sub-category with two parents counts twice. Cycles are cut at re-entry,
/// matching [`crate::visible_rows`].
pub fn count_nodes(forest: &Forest) -> usize {
    let mut count = 0;
    walk(forest, |_| {
        count += 1;
        true
    });
    count
}

/// "showing N of M" summary for the tree header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeCounts {
    pub shown: usize,
    pub total: usize,
}

impl TreeCounts {
    pub fn new(filtered: &Forest, unfiltered: &Forest) -> Self {
        Self {
            shown: count_nodes(filtered),
            total: count_nodes(unfiltered),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.shown != self.total
    }
}

impl fmt::Display for TreeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "showing {} of {}", self.shown, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_forest, KindFilter};
    use crate::forest::build_forest;
    use crate::record::CategoryRecord;

    #[test]
    fn test_count_flat() {
        let records: Vec<CategoryRecord> = (1..=5)
            .map(|id| CategoryRecord::new(id, format!("Category {}", id)))
            .collect();
        assert_eq!(count_nodes(&build_forest(&records)), records.len());
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count_nodes(&Forest::new()), 0);
    }

    #[test]
    fn test_tree_counts_display() {
        let forest = build_forest(&[
            CategoryRecord::new(1, "Fruit"),
            CategoryRecord::new(2, "Dairy"),
        ]);
        let filtered = filter_forest(&forest, "dairy", KindFilter::All);
        let counts = TreeCounts::new(&filtered, &forest);

        assert!(counts.is_filtered());
        assert_eq!(counts.to_string(), "showing 1 of 2");
    }
}
