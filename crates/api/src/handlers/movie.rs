//! Handlers for the `/movies` resource.
//!
//! Movies are read-only over HTTP.

use axum::extract::State;
use axum::Json;
use marquee_core::movie_filter::{require_matches, MovieFilter};
use marquee_core::types::DbId;
use marquee_db::models::movie::Movie;
use marquee_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::{ApiPath, ApiQuery, MovieListParams};
use crate::state::AppState;

/// GET /movies/?director_id=&genre_id=
///
/// Without parameters, lists every movie. With either or both, lists the
/// movies matching all of them and answers 404 when none do.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let filter = MovieFilter::from(params);
    let movies = MovieRepo::list(&state.pool, &filter).await?;
    tracing::debug!(
        director_id = ?filter.director_id,
        genre_id = ?filter.genre_id,
        count = movies.len(),
        "Resolved movie listing"
    );
    let movies = require_matches(&filter, movies)?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Movie", id))?;
    Ok(Json(movie))
}
