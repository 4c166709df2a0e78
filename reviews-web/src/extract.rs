//! Request-scoped database connection
//!
//! Handlers take a `DbConn` instead of the whole pool. The connection is
//! checked out when the request is extracted and goes back to the pool when
//! the handler returns, on success or failure.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::Sqlite;

use crate::error::ApiError;
use crate::AppState;

pub struct DbConn(pub PoolConnection<Sqlite>);

#[async_trait]
impl FromRequestParts<AppState> for DbConn {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let conn = state.db.acquire().await?;
        Ok(Self(conn))
    }
}
