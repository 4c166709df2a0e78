//! reviews-web library - movie review manager HTTP front end
//!
//! Server-rendered pages for listing, viewing, writing, editing and
//! deleting reviews stored in SQLite.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod extract;
pub mod pages;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::list_reviews))
        .route("/review/:id", get(api::show_review))
        .route("/edit/:id", get(api::edit_form).post(api::submit_edit))
        .route("/create/", get(api::create_form).post(api::submit_create))
        .route("/delete/:id", get(api::delete_review))
        .route("/reset-db", get(api::reset_db).post(api::reset_db))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
