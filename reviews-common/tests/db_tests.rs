//! Integration tests for the review schema, bootstrap and queries
//!
//! Each test works on its own SQLite file inside a temporary directory.

use reviews_common::db::{self, reviews};
use reviews_common::{NewReview, Outcome, Rating};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};
use tempfile::TempDir;

async fn setup_test_db() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let pool = db::init_database(&dir.path().join("thereviews.db"))
        .await
        .expect("Should initialize database");
    (dir, pool)
}

async fn conn(pool: &SqlitePool) -> PoolConnection<Sqlite> {
    pool.acquire().await.expect("Should acquire connection")
}

fn review(title: &str, text: &str, rating: i64) -> NewReview {
    NewReview::new(title, text, Rating::new(rating).unwrap()).unwrap()
}

#[tokio::test]
async fn test_database_file_created_in_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("thereviews.db");

    let pool = db::init_database(&db_path).await;

    assert!(pool.is_ok(), "Database initialization failed: {:?}", pool.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("thereviews.db");

    let pool1 = db::init_database(&db_path).await.unwrap();
    reviews::create(&mut *conn(&pool1).await, &review("Kept", "Still here", 2))
        .await
        .unwrap();
    pool1.close().await;

    let pool2 = db::init_database(&db_path).await.unwrap();
    let all = reviews::get_all(&mut *conn(&pool2).await).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Kept");
}

#[tokio::test]
async fn test_create_then_get_returns_same_values() {
    let (_dir, pool) = setup_test_db().await;
    let mut conn = conn(&pool).await;

    let id = reviews::create(&mut conn, &review("Mr. Pumpkin Man", "This is a pretty bad movie", 4))
        .await
        .unwrap();

    let all = reviews::get_all(&mut conn).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(id, 1);

    let fetched = reviews::get(&mut conn, id).await.unwrap().expect("review exists");
    assert_eq!(fetched.id, 1);
    assert_eq!(fetched.title, "Mr. Pumpkin Man");
    assert_eq!(fetched.text, "This is a pretty bad movie");
    assert_eq!(fetched.rating, 4);
    assert_eq!(all[0], fetched);
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let (_dir, pool) = setup_test_db().await;
    let mut conn = conn(&pool).await;

    assert!(reviews::get(&mut conn, 42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_id() {
    let (_dir, pool) = setup_test_db().await;
    let mut conn = conn(&pool).await;

    let id = reviews::create(&mut conn, &review("Heat", "Long but good", 4))
        .await
        .unwrap();

    let outcome = reviews::update(&mut conn, id, &review("Heat", "Even better the second time", 5))
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Success);

    let updated = reviews::get(&mut conn, id).await.unwrap().unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Heat");
    assert_eq!(updated.text, "Even better the second time");
    assert_eq!(updated.rating, 5);
}

#[tokio::test]
async fn test_update_missing_is_not_found_noop() {
    let (_dir, pool) = setup_test_db().await;
    let mut conn = conn(&pool).await;

    let outcome = reviews::update(&mut conn, 7, &review("Ghost", "Nobody home", 1))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(reviews::count(&mut conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (_dir, pool) = setup_test_db().await;
    let mut conn = conn(&pool).await;

    let id = reviews::create(&mut conn, &review("Cats", "No.", 0)).await.unwrap();

    assert_eq!(reviews::delete(&mut conn, id).await.unwrap(), Outcome::Success);
    assert!(reviews::get(&mut conn, id).await.unwrap().is_none());

    // Second delete of the same id is a no-op
    assert_eq!(reviews::delete(&mut conn, id).await.unwrap(), Outcome::NotFound);
}

#[tokio::test]
async fn test_seed_only_when_empty() {
    let (_dir, pool) = setup_test_db().await;
    let mut conn = conn(&pool).await;

    assert!(db::seed_if_empty(&mut conn).await.unwrap());
    assert!(!db::seed_if_empty(&mut conn).await.unwrap());

    let all = reviews::get_all(&mut conn).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, db::SEED_TITLE);
    assert_eq!(all[0].text, db::SEED_TEXT);
    assert_eq!(all[0].rating, db::SEED_RATING);
}

#[tokio::test]
async fn test_reset_schema_empties_table() {
    let (_dir, pool) = setup_test_db().await;
    let mut conn = conn(&pool).await;

    reviews::create(&mut conn, &review("One", "First", 1)).await.unwrap();
    reviews::create(&mut conn, &review("Two", "Second", 2)).await.unwrap();

    db::reset_schema(&mut conn).await.unwrap();

    assert!(reviews::get_all(&mut conn).await.unwrap().is_empty());

    // Ids start over on the recreated table
    let id = reviews::create(&mut conn, &review("Three", "Third", 3)).await.unwrap();
    assert_eq!(id, 1);
}
