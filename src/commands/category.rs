//! Category Commands
//!
//! Fetch and delete categories through the REST API.

use category_tree::{CategoryId, CategoryRecord};

use super::{fetch_json, send};
use crate::config::ViewConfig;
use crate::models::{into_records, CategoryListResponse};

/// Fetch the full flat category list
pub async fn list_categories(config: &ViewConfig) -> Result<Vec<CategoryRecord>, String> {
    let value = fetch_json("GET", &config.categories_url()).await?;
    let response: CategoryListResponse =
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())?;
    Ok(into_records(response.into_items()))
}

pub async fn delete_category(config: &ViewConfig, id: CategoryId) -> Result<(), String> {
    send("DELETE", &config.category_url(id)).await?;
    Ok(())
}
