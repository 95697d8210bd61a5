//! Frontend Models
//!
//! Category shapes as the marketplace API sends them, and their mapping onto
//! the core `CategoryRecord`.

use category_tree::{CategoryRecord, CategoryResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCategory {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub is_sub_category: bool,
    /// May be `null` for top-level categories
    #[serde(default)]
    pub parent_categories: Option<Vec<u32>>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApiCategory {
    /// Map to a validated core record
    pub fn into_record(self) -> CategoryResult<CategoryRecord> {
        let record = CategoryRecord {
            id: self.id,
            name: self.name,
            short_description: self.short_description.unwrap_or_default(),
            long_description: self.long_description.unwrap_or_default(),
            is_sub_category: self.is_sub_category,
            parent_ids: self.parent_categories.unwrap_or_default(),
            cover_image: self.cover_image.filter(|image| !image.is_empty()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        record.validate()?;
        Ok(record)
    }
}

/// List payload: either a bare array or wrapped in `{ "data": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryListResponse {
    Bare(Vec<ApiCategory>),
    Wrapped { data: Vec<ApiCategory> },
}

impl CategoryListResponse {
    pub fn into_items(self) -> Vec<ApiCategory> {
        match self {
            CategoryListResponse::Bare(items) => items,
            CategoryListResponse::Wrapped { data } => data,
        }
    }
}

/// Convert fetched categories, skipping the ones that fail validation
pub fn into_records(items: Vec<ApiCategory>) -> Vec<CategoryRecord> {
    items
        .into_iter()
        .filter_map(|item| match item.into_record() {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("[MODELS] Skipping category: {}", e);
                None
            }
        })
        .collect()
}
