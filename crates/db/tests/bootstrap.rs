mod common;

/// Full bootstrap test: connect, migrate, verify schema.
#[tokio::test]
async fn test_full_bootstrap() {
    let pool = common::test_pool().await;

    marquee_db::health_check(&pool).await.unwrap();

    for table in ["movie", "director", "genre"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Running migrations a second time is a no-op.
#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = common::test_pool().await;
    marquee_db::run_migrations(&pool).await.unwrap();
}

/// Opening a file URL creates the database file.
#[tokio::test]
async fn test_file_database_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let url = format!("sqlite://{}", path.display());

    let pool = marquee_db::create_pool(&url, 2).await.unwrap();
    marquee_db::run_migrations(&pool).await.unwrap();

    assert!(path.exists());
}
