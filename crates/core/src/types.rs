//! Shared type aliases used across the backend crates.

/// Document identifier: 24 lowercase hex characters.
///
/// Identifiers are generated and validated in the database layer; this
/// alias only fixes the representation the rest of the code passes around.
pub type EntityId = String;

/// UTC timestamp used for temporal fields.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
