//! Category Store
//!
//! Immutable snapshot of the flat record list as fetched from the backend.
//! Replaced wholesale after every create/update/delete.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CategoryError, CategoryResult};
use crate::forest::{build_from_shared, Forest};
use crate::record::{CategoryId, CategoryRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStore {
    records: Vec<Arc<CategoryRecord>>,
    index: HashMap<CategoryId, usize>,
}

impl CategoryStore {
    /// Normalize a fetched list: first occurrence of an id wins, order is kept.
    pub fn from_records(records: Vec<CategoryRecord>) -> Self {
        let mut store = Self::default();
        for record in records {
            if store.index.contains_key(&record.id) {
                log::warn!("duplicate category id {} in fetched list, dropping", record.id);
                continue;
            }
            store.index.insert(record.id, store.records.len());
            store.records.push(Arc::new(record));
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &CategoryRecord> + '_ {
        self.records.iter().map(|record| record.as_ref())
    }

    pub fn get(&self, id: CategoryId) -> Option<&CategoryRecord> {
        self.index.get(&id).map(|&pos| self.records[pos].as_ref())
    }

    /// Like [`get`](Self::get) but reports a missing id as an error
    pub fn require(&self, id: CategoryId) -> CategoryResult<&CategoryRecord> {
        self.get(id).ok_or(CategoryError::NotFound(id))
    }

    /// Resolved parents of `id`, in declared order.
    ///
    /// Empty for roots and unknown ids; dangling parent ids are skipped.
    pub fn parents_of(&self, id: CategoryId) -> Vec<&CategoryRecord> {
        match self.get(id) {
            Some(record) => record
                .placement_parents()
                .into_iter()
                .filter_map(|parent_id| self.get(parent_id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// `(child, missing_parent)` pairs for parent ids that resolve to nothing
    pub fn dangling_references(&self) -> Vec<(CategoryId, CategoryId)> {
        let mut dangling = Vec::new();
        for record in self.records() {
            for parent_id in record.placement_parents() {
                if self.get(parent_id).is_none() {
                    dangling.push((record.id, parent_id));
                }
            }
        }
        dangling
    }

    /// Build the category forest for this snapshot
    pub fn forest(&self) -> Forest {
        build_from_shared(self.records.iter().cloned())
    }
}
