//! Storage backend settings management.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use skyvault_core::error::AppError;
use skyvault_database::repositories::settings::SettingsRepository;
use skyvault_entity::settings::{StorageSettings, SETTINGS_ROW_ID};

/// Manages the singleton storage backend record.
///
/// The record is purely descriptive: switching providers changes nothing
/// about where content bytes are written. Credential fields are persisted
/// verbatim without validation.
#[derive(Debug, Clone)]
pub struct SettingsService {
    /// Settings repository.
    settings_repo: Arc<SettingsRepository>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(settings_repo: Arc<SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Returns the active settings, defaulting to the local provider when
    /// none have been persisted.
    pub async fn get(&self) -> Result<StorageSettings, AppError> {
        Ok(self.settings_repo.get().await?.unwrap_or_default())
    }

    /// Persists new settings, replacing the singleton row.
    pub async fn put(&self, settings: StorageSettings) -> Result<StorageSettings, AppError> {
        let settings = StorageSettings {
            id: SETTINGS_ROW_ID,
            updated_at: Utc::now(),
            ..settings
        };

        self.settings_repo.put(&settings).await?;

        info!(provider = %settings.provider, "Storage settings updated");

        Ok(settings)
    }
}
