//! SQLite connection pool management.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tokio::sync::OnceCell;
use tracing::info;

use skyvault_core::config::DatabaseConfig;
use skyvault_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx SQLite connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    ///
    /// The database file and its parent directories are created when
    /// missing, and pending migrations are applied before the pool is
    /// handed out.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            path = %config.path,
            max_connections = config.max_connections,
            "Opening SQLite database"
        );

        if let Some(parent) = Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to open database: {e}"),
                    e,
                )
            })?;

        crate::migration::run_migrations(&pool).await?;

        info!("SQLite database ready");
        Ok(Self { pool })
    }

    /// Open a fresh in-memory database (for tests).
    ///
    /// The pool is pinned to a single connection so the in-memory
    /// database survives for the pool's whole lifetime.
    pub async fn connect_in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Invalid memory URI", e))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to open in-memory database: {e}"),
                    e,
                )
            })?;

        crate::migration::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Return the underlying sqlx pool (consuming self).
    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

static GLOBAL_POOL: OnceCell<DatabasePool> = OnceCell::const_new();

/// Return the process-wide database pool, opening it on first use.
///
/// Concurrent first callers await the same in-flight initialization
/// rather than opening duplicate connections. The pool is never torn
/// down; it outlives every caller.
pub async fn global(config: &DatabaseConfig) -> Result<&'static DatabasePool, AppError> {
    GLOBAL_POOL
        .get_or_try_init(|| DatabasePool::connect(config))
        .await
}
