//! Request handlers for the taxonomy resources.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! update, delete) for a single resource. Handlers delegate to the
//! corresponding repository in `fauna_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod animal;
pub mod category;
pub mod species;
