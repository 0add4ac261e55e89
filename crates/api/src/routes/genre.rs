//! Route definitions for the `/genre` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// ```text
/// GET    /genre/        -> list
/// POST   /genre/        -> create
/// GET    /genre/{id}    -> get_by_id
/// PUT    /genre/{id}    -> update
/// DELETE /genre/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genre/", get(genre::list).post(genre::create))
        .route("/genre", get(genre::list).post(genre::create))
        .route(
            "/genre/{id}",
            get(genre::get_by_id)
                .put(genre::update)
                .delete(genre::delete),
        )
}
