//! Expansion State
//!
//! Which categories the user has opened. Keyed by category id rather than by
//! placement, so a shared sub-category opens under every parent at once.
//! Updates return a new state; the UI layer owns the current value.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::forest::Forest;
use crate::record::CategoryId;
use crate::store::CategoryStore;
use crate::walk::walk;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    open: BTreeSet<CategoryId>,
}

impl ExpansionState {
    /// Everything collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Open every category that has visible children in `forest`
    pub fn expand_all(forest: &Forest) -> Self {
        let mut open = BTreeSet::new();
        walk(forest, |visit| {
            if visit.has_children {
                open.insert(visit.record.id);
            }
            true
        });
        Self { open }
    }

    pub fn collapse_all(&self) -> Self {
        Self::new()
    }

    /// Flip `id` between open and closed
    pub fn toggle(&self, id: CategoryId) -> Self {
        let mut open = self.open.clone();
        if !open.remove(&id) {
            open.insert(id);
        }
        Self { open }
    }

    pub fn is_open(&self, id: CategoryId) -> bool {
        self.open.contains(&id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn open_ids(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.open.iter().copied()
    }

    /// Drop ids whose records are gone from `store` (after a refetch)
    pub fn retain_known(&self, store: &CategoryStore) -> Self {
        Self {
            open: self
                .open
                .iter()
                .copied()
                .filter(|&id| store.get(id).is_some())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::build_forest;
    use crate::record::CategoryRecord;

    #[test]
    fn test_toggle_is_immutable() {
        let closed = ExpansionState::new();
        let opened = closed.toggle(4);

        assert!(!closed.is_open(4));
        assert!(opened.is_open(4));
        assert!(!opened.toggle(4).is_open(4));
    }

    #[test]
    fn test_expand_all_only_opens_parents() {
        let forest = build_forest(&[
            CategoryRecord::new(1, "Fruit"),
            CategoryRecord::new(2, "Dairy"),
            CategoryRecord::new_sub(3, "Apples", vec![1]),
        ]);
        let state = ExpansionState::expand_all(&forest);

        assert_eq!(state.open_ids().collect::<Vec<_>>(), vec![1]);
        assert_eq!(state.collapse_all().open_count(), 0);
    }

    #[test]
    fn test_retain_known_drops_deleted() {
        let store = CategoryStore::from_records(vec![CategoryRecord::new(1, "Fruit")]);
        let state = ExpansionState::new().toggle(1).toggle(8);

        let pruned = state.retain_known(&store);
        assert!(pruned.is_open(1));
        assert!(!pruned.is_open(8));
    }
}
