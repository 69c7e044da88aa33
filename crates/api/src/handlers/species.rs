//! Handlers for the `/species` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fauna_core::error::CoreError;
use fauna_core::query::SortOrder;
use fauna_db::models::species::{CreateSpecies, Species};
use fauna_db::repositories::{SpeciesRepo, UpdateReport};
use mongodb::bson::{doc, Document};

use crate::error::{AppError, AppJson, AppResult};
use crate::query::ListParams;
use crate::response::DeleteAck;
use crate::state::AppState;

/// GET /species
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Species>>> {
    let query = params.into_query(SortOrder::Desc);
    let species = SpeciesRepo::list(&state.db, &query).await?;
    Ok(Json(species))
}

/// POST /species
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSpecies>,
) -> AppResult<(StatusCode, Json<Species>)> {
    let name = input.name.unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Species name is required".to_string(),
        )));
    }

    let category = input.category.unwrap_or_default();
    if category.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category ID is required".to_string(),
        )));
    }
    let category = fauna_db::parse_id(&category)?;

    let species = Species {
        id: fauna_db::new_id(),
        name,
        category,
        image: input.image,
        location: input.location,
    };
    SpeciesRepo::insert(&state.db, &species).await?;
    Ok((StatusCode::CREATED, Json(species)))
}

/// GET /species/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Species>> {
    let id = fauna_db::parse_id(&id)?;
    let species = SpeciesRepo::find_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Species" }))?;
    Ok(Json(species))
}

/// GET /species/name/{name}
///
/// Exact-match lookup; returns the first species carrying the name.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Species>> {
    let species = SpeciesRepo::find_one(&state.db, doc! { "name": &name })
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Species" }))?;
    Ok(Json(species))
}

/// PUT /species/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(changes): AppJson<Document>,
) -> AppResult<Json<UpdateReport>> {
    let id = fauna_db::parse_id(&id)?;
    let report = SpeciesRepo::update_by_id(&state.db, &id, changes).await?;
    Ok(Json(report))
}

/// DELETE /species/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let id = fauna_db::parse_id(&id)?;
    SpeciesRepo::delete_by_id(&state.db, &id).await?;
    Ok(Json(DeleteAck { success: true }))
}
