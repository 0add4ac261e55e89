use marquee_db::DbPool;

/// Fresh in-memory database with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = marquee_db::create_pool("sqlite::memory:", 1).await.unwrap();
    marquee_db::run_migrations(&pool).await.unwrap();
    pool
}
