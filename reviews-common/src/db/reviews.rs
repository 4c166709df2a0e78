//! Review queries
//!
//! Every function runs against a caller-supplied connection and commits on
//! its own; nothing here spans more than one statement.

use sqlx::SqliteConnection;

use crate::models::{NewReview, Outcome, Review};
use crate::Result;

/// Fetch all reviews in storage order
pub async fn get_all(conn: &mut SqliteConnection) -> Result<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>("SELECT id, title, text, rating FROM thereviews")
        .fetch_all(&mut *conn)
        .await?;

    Ok(reviews)
}

/// Fetch one review, `None` if no row has this id
pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<Review>> {
    let review = sqlx::query_as::<_, Review>(
        "SELECT id, title, text, rating FROM thereviews WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(review)
}

/// Insert a review and return the id assigned by storage
pub async fn create(conn: &mut SqliteConnection, review: &NewReview) -> Result<i64> {
    let result = sqlx::query("INSERT INTO thereviews (title, text, rating) VALUES (?, ?, ?)")
        .bind(&review.title)
        .bind(&review.text)
        .bind(review.rating.value())
        .execute(&mut *conn)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite title, text and rating of an existing review
pub async fn update(conn: &mut SqliteConnection, id: i64, review: &NewReview) -> Result<Outcome> {
    let result = sqlx::query("UPDATE thereviews SET title = ?, text = ?, rating = ? WHERE id = ?")
        .bind(&review.title)
        .bind(&review.text)
        .bind(review.rating.value())
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(Outcome::from_rows_affected(result.rows_affected()))
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<Outcome> {
    let result = sqlx::query("DELETE FROM thereviews WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(Outcome::from_rows_affected(result.rows_affected()))
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM thereviews")
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}
