//! Settings repository implementation.
//!
//! The settings collection holds exactly one row, keyed by
//! [`SETTINGS_ROW_ID`].

use sqlx::SqlitePool;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;
use skyvault_entity::settings::{StorageSettings, SETTINGS_ROW_ID};

/// Repository for the singleton settings collection.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the persisted settings row, if any.
    pub async fn get(&self) -> AppResult<Option<StorageSettings>> {
        sqlx::query_as::<_, StorageSettings>("SELECT * FROM settings WHERE id = ?")
            .bind(SETTINGS_ROW_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load settings", e))
    }

    /// Insert or replace the singleton settings row.
    pub async fn put(&self, settings: &StorageSettings) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO settings (id, provider, root_path, access_key, secret_key, bucket, \
             region, endpoint, client_id, client_secret, refresh_token, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET provider = excluded.provider, \
             root_path = excluded.root_path, access_key = excluded.access_key, \
             secret_key = excluded.secret_key, bucket = excluded.bucket, \
             region = excluded.region, endpoint = excluded.endpoint, \
             client_id = excluded.client_id, client_secret = excluded.client_secret, \
             refresh_token = excluded.refresh_token, updated_at = excluded.updated_at",
        )
        .bind(SETTINGS_ROW_ID)
        .bind(settings.provider)
        .bind(&settings.root_path)
        .bind(&settings.access_key)
        .bind(&settings.secret_key)
        .bind(&settings.bucket)
        .bind(&settings.region)
        .bind(&settings.endpoint)
        .bind(&settings.client_id)
        .bind(&settings.client_secret)
        .bind(&settings.refresh_token)
        .bind(settings.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store settings", e))?;
        Ok(())
    }
}
