//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fauna_core::error::CoreError;
use fauna_core::query::SortOrder;
use fauna_db::models::category::{Category, CreateCategory};
use fauna_db::repositories::{CategoryRepo, UpdateReport};
use mongodb::bson::Document;

use crate::error::{AppError, AppJson, AppResult};
use crate::query::ListParams;
use crate::response::DeleteAck;
use crate::state::AppState;

/// GET /categories
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Category>>> {
    let query = params.into_query(SortOrder::Desc);
    let categories = CategoryRepo::list(&state.db, &query).await?;
    Ok(Json(categories))
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let name = input.name.unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category name is required".to_string(),
        )));
    }

    let category = Category {
        id: fauna_db::new_id(),
        name,
    };
    CategoryRepo::insert(&state.db, &category).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = fauna_db::parse_id(&id)?;
    let category = CategoryRepo::find_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Category" }))?;
    Ok(Json(category))
}

/// PUT /categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(changes): AppJson<Document>,
) -> AppResult<Json<UpdateReport>> {
    let id = fauna_db::parse_id(&id)?;
    let report = CategoryRepo::update_by_id(&state.db, &id, changes).await?;
    Ok(Json(report))
}

/// DELETE /categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let id = fauna_db::parse_id(&id)?;
    CategoryRepo::delete_by_id(&state.db, &id).await?;
    Ok(Json(DeleteAck { success: true }))
}
