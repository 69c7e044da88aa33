use axum::routing::get;
use axum::Router;

use crate::handlers::animal;
use crate::state::AppState;

/// Routes mounted at `/animals`.
///
/// The listing returns joined rows (animal plus embedded species and
/// category); the single-record routes operate on the flat animal record.
///
/// ```text
/// GET    /        -> list (joined view)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(animal::list).post(animal::create))
        .route(
            "/{id}",
            get(animal::get_by_id)
                .put(animal::update)
                .delete(animal::delete),
        )
}
