//! Domain errors, shared type aliases, and pure list-query helpers.
//!
//! This crate has no database or HTTP dependencies so it can be used by
//! both the API/repository layer and any future CLI tooling.

pub mod error;
pub mod query;
pub mod types;
