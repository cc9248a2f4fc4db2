//! Storage settings entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::provider::StorageProvider;

/// The fixed primary key of the singleton settings row.
pub const SETTINGS_ROW_ID: i64 = 1;

/// The persisted storage backend configuration.
///
/// Exactly one row exists; reading an empty collection yields
/// [`StorageSettings::default`], which selects the local provider.
/// Credential fields are stored verbatim without validation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StorageSettings {
    /// Singleton row key, always [`SETTINGS_ROW_ID`].
    pub id: i64,
    /// Selected provider.
    pub provider: StorageProvider,
    /// Root path prefix used to build storage keys.
    pub root_path: String,
    /// Access key for S3-compatible providers.
    pub access_key: Option<String>,
    /// Secret key for S3-compatible providers.
    pub secret_key: Option<String>,
    /// Bucket name for S3-compatible providers.
    pub bucket: Option<String>,
    /// Region for S3-compatible providers.
    pub region: Option<String>,
    /// Custom endpoint (Wasabi).
    pub endpoint: Option<String>,
    /// OAuth client ID (Google Drive).
    pub client_id: Option<String>,
    /// OAuth client secret (Google Drive).
    pub client_secret: Option<String>,
    /// OAuth refresh token (Google Drive).
    pub refresh_token: Option<String>,
    /// When the settings were last updated.
    pub updated_at: DateTime<Utc>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            id: SETTINGS_ROW_ID,
            provider: StorageProvider::Local,
            root_path: "skyvault".to_string(),
            access_key: None,
            secret_key: None,
            bucket: None,
            region: None,
            endpoint: None,
            client_id: None,
            client_secret: None,
            refresh_token: None,
            updated_at: Utc::now(),
        }
    }
}

impl StorageSettings {
    /// Build the logical storage key for a file name under this
    /// configuration's root path.
    pub fn storage_key_for(&self, name: &str) -> String {
        format!("{}/{}", self.root_path.trim_end_matches('/'), name)
    }
}
