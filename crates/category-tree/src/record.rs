//! Category Record
//!
//! The flat category entity as it arrives from the backend. Tree shape is
//! derived from `parent_ids`, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CategoryError, CategoryResult};

/// Category identifier (positive; 0 is reserved as "unset")
pub type CategoryId = u32;

/// A single category as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Unique identifier
    pub id: CategoryId,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    /// True when the record only makes sense under one or more parents
    #[serde(default)]
    pub is_sub_category: bool,
    /// Declared parents, in the order the backend lists them
    #[serde(default)]
    pub parent_ids: Vec<CategoryId>,
    /// Opaque image reference, resolved by the caller
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CategoryRecord {
    /// Create a top-level category
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            short_description: String::new(),
            long_description: String::new(),
            is_sub_category: false,
            parent_ids: Vec::new(),
            cover_image: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Create a sub-category placed under `parent_ids`
    pub fn new_sub(id: CategoryId, name: impl Into<String>, parent_ids: Vec<CategoryId>) -> Self {
        Self {
            is_sub_category: true,
            parent_ids,
            ..Self::new(id, name)
        }
    }

    pub fn with_descriptions(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
        self.short_description = short.into();
        self.long_description = long.into();
        self
    }

    /// Whether this record sits at the top level of the forest.
    ///
    /// `is_sub_category` wins over `parent_ids`: a non-sub record with parents
    /// listed is still a root.
    pub fn is_root(&self) -> bool {
        !self.is_sub_category || self.parent_ids.is_empty()
    }

    /// Parents this record is placed under, deduplicated and without self-links.
    ///
    /// Empty for roots. Unknown ids are not filtered here; the builder skips them.
    pub fn placement_parents(&self) -> Vec<CategoryId> {
        if self.is_root() {
            return Vec::new();
        }
        let mut parents: Vec<CategoryId> = Vec::with_capacity(self.parent_ids.len());
        for &parent_id in &self.parent_ids {
            if parent_id != self.id && !parents.contains(&parent_id) {
                parents.push(parent_id);
            }
        }
        parents
    }

    /// Check the fields a record needs to be placed in a tree
    pub fn validate(&self) -> CategoryResult<()> {
        if self.id == 0 {
            return Err(CategoryError::InvalidInput(format!(
                "category '{}' has no id",
                self.name
            )));
        }
        if self.name.trim().is_empty() {
            return Err(CategoryError::InvalidInput(format!(
                "category {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }
}
