//! PostgreSQL repository tests.
//!
//! Need a live database: `DATABASE_URL=postgres://... cargo test -- --ignored`.

use alias_shortener::domain::repositories::{UrlGetter, UrlSaver};
use alias_shortener::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_save_and_get_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let id = repo
        .save_url("https://example.com/very/long/path", "aB3xZ9")
        .await
        .unwrap();

    assert!(id > 0);
    assert_eq!(
        repo.get_url("aB3xZ9").await.unwrap(),
        "https://example.com/very/long/path"
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_ids_increase(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let first = repo.save_url("https://a.com", "first").await.unwrap();
    let second = repo.save_url("https://b.com", "second").await.unwrap();

    assert!(second > first);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_get_url_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let err = repo.get_url("missing").await.unwrap_err();

    assert!(err.is_not_found());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_alias(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));
    repo.save_url("https://first.com", "dup").await.unwrap();

    let err = repo
        .save_url("https://second.com", "dup")
        .await
        .unwrap_err();

    assert!(err.is_alias_exists());
    assert_eq!(repo.get_url("dup").await.unwrap(), "https://first.com");

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = 'dup'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}
