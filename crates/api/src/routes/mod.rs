pub mod animal;
pub mod category;
pub mod health;
pub mod species;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the application root.
///
/// Route hierarchy:
///
/// ```text
/// /categories                  list, create
/// /categories/{id}             get, update, delete
///
/// /species                     list, create
/// /species/{id}                get, update, delete
/// /species/name/{name}         get by exact name
///
/// /animals                     list (joined view), create
/// /animals/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/species", species::router())
        .nest("/animals", animal::router())
}
