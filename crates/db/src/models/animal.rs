//! Animal entity model and DTOs.

use fauna_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::location::Location;

/// An animal document from the `animals` collection.
///
/// `birthdate` is stored as an RFC 3339 string so the stored form, the
/// JSON form, and the joined aggregation output are all identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    #[serde(rename = "_id")]
    pub id: EntityId,
    pub name: String,
    /// Species this animal belongs to, if any. Stored as a plain id
    /// string; existence of the referenced species is never enforced.
    pub species: Option<EntityId>,
    pub birthdate: Option<Timestamp>,
    pub image: Option<String>,
    pub location: Option<Location>,
}

/// DTO for creating a new animal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimal {
    pub name: Option<String>,
    pub species: Option<String>,
    pub birthdate: Option<Timestamp>,
    pub image: Option<String>,
    pub location: Option<Location>,
}
