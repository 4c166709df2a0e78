//! reviews-web - movie review manager
//!
//! Serves server-rendered pages for creating, reading, updating and deleting
//! reviews held in a local SQLite database.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reviews_common::config::DatabasePathResolver;
use reviews_common::db;
use sqlx::SqlitePool;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reviews_web::{build_router, AppState};

/// Command-line arguments for reviews-web
#[derive(Parser, Debug)]
#[command(name = "reviews-web")]
#[command(about = "Movie review manager")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "REVIEWS_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "REVIEWS_PORT")]
    port: u16,

    /// SQLite database file (overrides REVIEWS_DATABASE and the config file)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "reviews_web=info,reviews_common=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification before touching the database
    info!(
        "Starting reviews-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let mut resolver = DatabasePathResolver::new().with_cli_arg(args.database);
    if let Some(config) = args.config {
        resolver = resolver.with_config_file(config);
    }
    let db_path = resolver.resolve();
    info!("Database path: {}", db_path.display());

    let pool = db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    // Seed once at startup
    {
        let mut conn = pool.acquire().await.context("Failed to acquire connection")?;
        db::seed_if_empty(&mut conn)
            .await
            .context("Failed to seed database")?;
    }

    let app = build_router(AppState::new(pool.clone()));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("reviews-web listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(pool))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, then close the review database pool
///
/// In-flight requests still hold their connections; `close` waits for them
/// to be returned before the pool shuts down.
async fn shutdown_signal(pool: SqlitePool) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = terminate => "SIGTERM",
    };

    info!("Received {}, no longer accepting review requests", signal_name);
    pool.close().await;
    info!("Review database closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviews_common::config::DATABASE_ENV_VAR;

    #[test]
    fn test_database_env_left_to_resolver() {
        std::env::set_var(DATABASE_ENV_VAR, "/tmp/reviews-env.db");

        let args = Args::try_parse_from(["reviews-web"]).unwrap();
        assert!(args.database.is_none());

        let resolved = DatabasePathResolver::new()
            .with_cli_arg(args.database)
            .resolve();
        assert_eq!(resolved, PathBuf::from("/tmp/reviews-env.db"));

        let args = Args::try_parse_from(["reviews-web", "--database", "/tmp/reviews-cli.db"]).unwrap();
        let resolved = DatabasePathResolver::new()
            .with_cli_arg(args.database)
            .resolve();
        assert_eq!(resolved, PathBuf::from("/tmp/reviews-cli.db"));

        std::env::remove_var(DATABASE_ENV_VAR);
    }
}
