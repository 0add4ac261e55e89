//! Handlers for the `/director` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::types::DbId;
use marquee_db::models::director::{CreateDirector, Director, UpdateDirector};
use marquee_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ApiJson, ApiPath};
use crate::state::AppState;

/// POST /director/
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDirector>,
) -> AppResult<(StatusCode, Json<Director>)> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /director/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /director/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Director", id))?;
    Ok(Json(director))
}

/// PUT /director/{id}
///
/// Only `name` is applied.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDirector>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Director", id))?;
    Ok(Json(director))
}

/// DELETE /director/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(director_id = id, "Director deleted");
        Ok(StatusCode::OK)
    } else {
        Err(AppError::not_found("Director", id))
    }
}
