#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use marquee_api::config::ServerConfig;
use marquee_api::state::AppState;
use marquee_db::models::movie::{CreateMovie, Movie};
use marquee_db::repositories::MovieRepo;
use marquee_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        ..ServerConfig::default()
    }
}

/// Fresh in-memory database with migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = marquee_db::create_pool("sqlite::memory:", 1).await.unwrap();
    marquee_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router, with every middleware layer the
/// binary uses, over the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with_config(pool: DbPool, config: ServerConfig) -> Router {
    marquee_api::app::build_app(AppState::new(pool, config)).unwrap()
}

/// Insert a movie directly through the store layer.
pub async fn seed_movie(
    pool: &DbPool,
    title: &str,
    director_id: Option<i64>,
    genre_id: Option<i64>,
) -> Movie {
    MovieRepo::create(
        pool,
        &CreateMovie {
            title: title.to_string(),
            description: format!("About {title}"),
            trailer: format!("https://trailers.example/{title}"),
            year: 1999,
            rating: 8.25,
            genre_id,
            director_id,
        },
    )
    .await
    .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, body).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
