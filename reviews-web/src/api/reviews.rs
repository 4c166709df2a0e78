//! Review pages and form submissions

use axum::{
    extract::Path,
    response::{Html, Redirect},
    Form,
};
use reviews_common::db::reviews;
use reviews_common::{NewReview, Outcome, Rating};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::extract::DbConn;
use crate::pages;

/// Fields posted by the create form
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub title: String,
    pub text: String,
    pub rating: String,
}

/// Fields posted by the edit form (title is not editable)
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub text: String,
    pub rating: String,
}

/// GET /
pub async fn list_reviews(DbConn(mut conn): DbConn) -> ApiResult<Html<String>> {
    let all = reviews::get_all(&mut conn).await?;
    Ok(Html(pages::index_page(&all)))
}

/// GET /review/:id
pub async fn show_review(
    Path(id): Path<i64>,
    DbConn(mut conn): DbConn,
) -> ApiResult<Html<String>> {
    let review = reviews::get(&mut conn, id)
        .await?
        .ok_or_else(|| ApiError::review_not_found(id))?;

    Ok(Html(pages::review_page(&review)))
}

/// GET /edit/:id
pub async fn edit_form(Path(id): Path<i64>, DbConn(mut conn): DbConn) -> ApiResult<Html<String>> {
    let review = reviews::get(&mut conn, id)
        .await?
        .ok_or_else(|| ApiError::review_not_found(id))?;

    Ok(Html(pages::edit_page(&review)))
}

/// POST /edit/:id
///
/// Keeps the stored title and overwrites text and rating.
pub async fn submit_edit(
    Path(id): Path<i64>,
    DbConn(mut conn): DbConn,
    Form(form): Form<EditForm>,
) -> ApiResult<Redirect> {
    let existing = reviews::get(&mut conn, id)
        .await?
        .ok_or_else(|| ApiError::review_not_found(id))?;

    let rating = Rating::parse(&form.rating)?;
    let updated = NewReview::new(existing.title, form.text, rating)?;

    match reviews::update(&mut conn, id, &updated).await? {
        Outcome::Success => info!("Updated review {}", id),
        // Deleted between the lookup and the write
        Outcome::NotFound => return Err(ApiError::review_not_found(id)),
    }

    Ok(Redirect::to("/"))
}

/// GET /create/
pub async fn create_form() -> Html<String> {
    Html(pages::create_page())
}

/// POST /create/
pub async fn submit_create(
    DbConn(mut conn): DbConn,
    Form(form): Form<CreateForm>,
) -> ApiResult<Redirect> {
    let rating = Rating::parse(&form.rating)?;
    let review = NewReview::new(form.title, form.text, rating)?;

    let id = reviews::create(&mut conn, &review).await?;
    info!("Created review {}", id);

    Ok(Redirect::to("/"))
}

/// GET /delete/:id
///
/// Redirects to the list whether or not the review existed.
pub async fn delete_review(Path(id): Path<i64>, DbConn(mut conn): DbConn) -> ApiResult<Redirect> {
    match reviews::delete(&mut conn, id).await? {
        Outcome::Success => info!("Deleted review {}", id),
        Outcome::NotFound => debug!("Delete of missing review {} ignored", id),
    }

    Ok(Redirect::to("/"))
}
