//! Route definitions for the `/director` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// ```text
/// GET    /director/        -> list
/// POST   /director/        -> create
/// GET    /director/{id}    -> get_by_id
/// PUT    /director/{id}    -> update
/// DELETE /director/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/director/", get(director::list).post(director::create))
        .route("/director", get(director::list).post(director::create))
        .route(
            "/director/{id}",
            get(director::get_by_id)
                .put(director::update)
                .delete(director::delete),
        )
}
