pub mod director;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/                 list (?director_id=&genre_id=)
/// /movies/{id}             get
///
/// /director/               list, create
/// /director/{id}           get, update, delete
///
/// /genre/                  list, create
/// /genre/{id}              get, update, delete
/// ```
///
/// Collection routes answer both with and without the trailing slash.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(movie::router())
        .merge(director::router())
        .merge(genre::router())
}
