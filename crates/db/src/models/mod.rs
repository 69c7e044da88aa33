//! Document model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `Serialize` + `Deserialize` struct matching the stored document,
//!   with the identifier mapped to the `_id` key
//! - A `Deserialize` create DTO whose fields are all optional, so absent
//!   and empty values produce the same validation errors

pub mod animal;
pub mod category;
pub mod location;
pub mod species;
