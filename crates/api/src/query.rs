//! Request extractors and query parameter types for API handlers.
//!
//! [`ApiJson`], [`ApiPath`] and [`ApiQuery`] behave like axum's extractors but
//! reject malformed input with an [`AppError::BadRequest`], so every error
//! body has the same `{ "error", "code" }` shape.

use axum::extract::{FromRequest, FromRequestParts};
use marquee_core::movie_filter::MovieFilter;
use marquee_core::types::DbId;
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};

use crate::error::AppError;

/// JSON body extractor with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Query parameters for `GET /movies/` (`?director_id=&genre_id=`).
///
/// An empty value (`?director_id=`) is the same as leaving the parameter out.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub director_id: Option<DbId>,
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub genre_id: Option<DbId>,
}

impl From<MovieListParams> for MovieFilter {
    fn from(params: MovieListParams) -> Self {
        MovieFilter::new(params.director_id, params.genre_id)
    }
}
