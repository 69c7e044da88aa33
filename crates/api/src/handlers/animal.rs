//! Handlers for the `/animals` resource.
//!
//! The listing is the one denormalized read in the API: it runs the
//! aggregation pipeline from `fauna_db` and returns joined rows with the
//! species and its category embedded. Single-record reads and writes
//! operate on the flat animal document.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fauna_core::error::CoreError;
use fauna_core::query::SortOrder;
use fauna_db::models::animal::{Animal, CreateAnimal};
use fauna_db::repositories::{AnimalRepo, UpdateReport};
use mongodb::bson::Document;

use crate::error::{AppError, AppJson, AppResult};
use crate::query::ListParams;
use crate::response::DeleteAck;
use crate::state::AppState;

/// GET /animals
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Document>>> {
    let query = params.into_query(SortOrder::Asc);
    let animals = AnimalRepo::list_joined(&state.db, &query).await?;
    Ok(Json(animals))
}

/// POST /animals
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAnimal>,
) -> AppResult<(StatusCode, Json<Animal>)> {
    let name = input.name.unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Animal name is required".to_string(),
        )));
    }

    // The species link is optional, but when given it must be a valid id.
    let species = match input.species.as_deref() {
        Some(raw) if !raw.is_empty() => Some(fauna_db::parse_id(raw)?),
        _ => None,
    };

    let animal = Animal {
        id: fauna_db::new_id(),
        name,
        species,
        birthdate: input.birthdate,
        image: input.image,
        location: input.location,
    };
    AnimalRepo::insert(&state.db, &animal).await?;
    Ok((StatusCode::CREATED, Json(animal)))
}

/// GET /animals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Animal>> {
    let id = fauna_db::parse_id(&id)?;
    let animal = AnimalRepo::find_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Animal" }))?;
    Ok(Json(animal))
}

/// PUT /animals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(changes): AppJson<Document>,
) -> AppResult<Json<UpdateReport>> {
    let id = fauna_db::parse_id(&id)?;
    let report = AnimalRepo::update_by_id(&state.db, &id, changes).await?;
    Ok(Json(report))
}

/// DELETE /animals/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let id = fauna_db::parse_id(&id)?;
    AnimalRepo::delete_by_id(&state.db, &id).await?;
    Ok(Json(DeleteAck { success: true }))
}
