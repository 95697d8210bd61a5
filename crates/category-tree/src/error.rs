//! Category Errors
//!
//! Errors raised by record validation and store lookups.
//! Tree building, filtering and counting never fail.

use serde::{Deserialize, Serialize};

use crate::record::CategoryId;

/// Common result type for category operations
pub type CategoryResult<T> = Result<T, CategoryError>;

/// Category-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryError {
    InvalidInput(String),
    NotFound(CategoryId),
}

impl std::fmt::Display for CategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CategoryError::NotFound(id) => write!(f, "Not found: category {}", id),
        }
    }
}

impl std::error::Error for CategoryError {}
