//! Species entity model and DTOs.

use fauna_core::types::EntityId;
use serde::{Deserialize, Serialize};

use crate::models::location::Location;

/// A species document from the `species` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    /// Category this species belongs to. Stored as a plain id string;
    /// existence of the referenced category is never enforced.
    pub category: EntityId,
    pub image: Option<String>,
    pub location: Option<Location>,
}

/// DTO for creating a new species.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpecies {
    pub name: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub location: Option<Location>,
}
