//! Handlers for the `/genre` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::types::DbId;
use marquee_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use marquee_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ApiJson, ApiPath};
use crate::state::AppState;

/// POST /genre/
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genre/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /genre/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Genre", id))?;
    Ok(Json(genre))
}

/// PUT /genre/{id}
///
/// Only `name` is applied.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateGenre>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Genre", id))?;
    Ok(Json(genre))
}

/// DELETE /genre/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(StatusCode::OK)
    } else {
        Err(AppError::not_found("Genre", id))
    }
}
