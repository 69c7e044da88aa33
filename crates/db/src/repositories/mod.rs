//! Repository layer.
//!
//! All three entities share one CRUD shape, so a single generic
//! [`EntityRepo`] provides the store operations; per-entity names are
//! type aliases over it. Methods are associated functions that accept
//! `&Database` as the first argument.

pub mod animal_repo;
pub mod entity_repo;

pub use animal_repo::joined_list_pipeline;
pub use entity_repo::{AnimalRepo, CategoryRepo, Entity, EntityRepo, SpeciesRepo, UpdateReport};
