//! Database initialization
//!
//! Creates the database file and `thereviews` table on startup, seeds one
//! sample review into an empty table, and recreates the schema on reset.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::db::reviews;
use crate::models::{NewReview, Rating};
use crate::Result;

pub const SEED_TITLE: &str = "Mr. Pumpkin Man";
pub const SEED_TEXT: &str = "This is a pretty bad movie";
pub const SEED_RATING: i64 = 4;

/// Open (creating if needed) the database file and ensure the schema exists
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    let mut conn = pool.acquire().await?;
    create_reviews_table(&mut conn).await?;

    Ok(pool)
}

/// Create the reviews table (idempotent)
pub async fn create_reviews_table(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS thereviews (
            id INTEGER PRIMARY KEY,
            title VARCHAR(60) NOT NULL,
            text TEXT NOT NULL,
            rating INTEGER NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Insert the sample review when the table is empty
///
/// Returns `true` if the seed record was written.
pub async fn seed_if_empty(conn: &mut SqliteConnection) -> Result<bool> {
    if reviews::count(conn).await? > 0 {
        return Ok(false);
    }

    let seed = NewReview::new(SEED_TITLE, SEED_TEXT, Rating::new(SEED_RATING)?)?;
    reviews::create(conn, &seed).await?;
    info!("Database initialized with sample data");

    Ok(true)
}

/// Drop and recreate the schema, discarding all reviews
pub async fn reset_schema(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS thereviews")
        .execute(&mut *conn)
        .await?;
    create_reviews_table(conn).await?;

    info!("Database reset: success");
    Ok(())
}
