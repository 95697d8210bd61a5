//! View Configuration
//!
//! Dashboard settings read from localStorage at startup.

use category_tree::{CategoryId, KindFilter};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::logger::parse_level;

/// localStorage key holding the JSON config
pub const CONFIG_STORAGE_KEY: &str = "category-admin.view-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Base URL of the marketplace REST API, without trailing slash
    pub api_base_url: String,
    /// Indentation per tree level, in pixels
    pub indent_px: usize,
    /// Delay before a search keystroke re-filters the tree
    pub search_debounce_ms: u32,
    /// Kind filter selected on load
    pub default_kind: KindFilter,
    pub log_level: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            indent_px: 20,
            search_debounce_ms: 150,
            default_kind: KindFilter::All,
            log_level: "info".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid view config: {}", e))
    }

    /// Read the config from localStorage. A missing entry yields defaults.
    pub fn load() -> Result<Self, String> {
        match local_storage()?
            .get_item(CONFIG_STORAGE_KEY)
            .map_err(|e| format!("{:?}", e))?
        {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        parse_level(&self.log_level)
    }

    pub fn categories_url(&self) -> String {
        format!("{}/categories", self.api_base_url.trim_end_matches('/'))
    }

    pub fn category_url(&self, id: CategoryId) -> String {
        format!("{}/{}", self.categories_url(), id)
    }
}

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("No window")?
        .local_storage()
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}
