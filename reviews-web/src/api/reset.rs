//! Schema reset

use axum::http::StatusCode;
use reviews_common::db;

use crate::error::ApiResult;
use crate::extract::DbConn;

/// GET|POST /reset-db
///
/// Drops and recreates the reviews table unconditionally.
pub async fn reset_db(DbConn(mut conn): DbConn) -> ApiResult<(StatusCode, &'static str)> {
    db::reset_schema(&mut conn).await?;
    Ok((StatusCode::OK, "Database has been reset!"))
}
