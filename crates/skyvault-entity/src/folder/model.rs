//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A folder in the file hierarchy.
///
/// Folders form a tree per owner. The root of each tree is not a real
/// record — a `parent_id` of `None` marks a top-level entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (`None` for top-level folders).
    pub parent_id: Option<Uuid>,
    /// The folder owner. Never changes after creation.
    pub owner_id: Uuid,
    /// Whether the folder is in the trash.
    pub is_trashed: bool,
    /// When the folder was trashed.
    pub trashed_at: Option<DateTime<Utc>>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a top-level folder (no parent).
    pub fn is_root_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (`None` for the top level).
    pub parent_id: Option<Uuid>,
    /// The folder owner.
    pub owner_id: Uuid,
}
