//! Category entity model and DTOs.

use fauna_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// A category document from the `categories` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
}
