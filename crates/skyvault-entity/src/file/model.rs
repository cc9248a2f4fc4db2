//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::FileCategory;

/// A file stored in SkyVault.
///
/// The opaque content payload is deliberately **not** part of this struct;
/// it stays in the store and is fetched separately to bound memory use.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CloudFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// The file name (including extension).
    pub name: String,
    /// File size in bytes.
    pub size: i64,
    /// Classification derived from the mime type at upload time.
    pub category: FileCategory,
    /// Parent folder (`None` for the top level).
    pub parent_id: Option<Uuid>,
    /// The file owner.
    pub owner_id: Uuid,
    /// MIME type supplied at upload.
    pub mime_type: String,
    /// Logical storage path (informational only).
    pub storage_key: String,
    /// Whether a share link is currently active.
    pub is_shared: bool,
    /// Opaque share token (present exactly when `is_shared`).
    pub share_token: Option<String>,
    /// When sharing was last enabled.
    pub share_created_at: Option<DateTime<Utc>>,
    /// Whether the file is in the trash.
    pub is_trashed: bool,
    /// When the file was trashed.
    pub trashed_at: Option<DateTime<Utc>>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl CloudFile {
    /// Check if the file is active (not trashed).
    pub fn is_active(&self) -> bool {
        !self.is_trashed
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to upload a new file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFile {
    /// The file name.
    pub name: String,
    /// File size in bytes.
    pub size: i64,
    /// MIME type.
    pub mime_type: String,
    /// Parent folder (`None` for the top level).
    pub parent_id: Option<Uuid>,
    /// The file owner.
    pub owner_id: Uuid,
}
