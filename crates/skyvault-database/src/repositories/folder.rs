//! Folder repository implementation.

use sqlx::SqlitePool;
use uuid::Uuid;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;
use skyvault_entity::folder::Folder;

/// Repository for the folders collection.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: SqlitePool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// List non-trashed folders directly under a parent for one owner.
    pub async fn find_by_parent_and_owner(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = ? AND parent_id IS ? AND is_trashed = 0",
        )
        .bind(owner_id)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// List all trashed folders for one owner (full scan, no index).
    pub async fn find_trashed_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = ? AND is_trashed = 1",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list trashed folders", e)
        })
    }

    /// Create a new folder record.
    pub async fn create(&self, folder: &Folder) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO folders (id, name, parent_id, owner_id, is_trashed, trashed_at, \
             created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(folder.id)
        .bind(&folder.name)
        .bind(folder.parent_id)
        .bind(folder.owner_id)
        .bind(folder.is_trashed)
        .bind(folder.trashed_at)
        .bind(folder.created_at)
        .bind(folder.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))?;
        Ok(())
    }

    /// Update a folder record.
    pub async fn update(&self, folder: &Folder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = ?, parent_id = ?, is_trashed = ?, trashed_at = ?, \
             updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&folder.name)
        .bind(folder.parent_id)
        .bind(folder.is_trashed)
        .bind(folder.trashed_at)
        .bind(folder.updated_at)
        .bind(folder.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update folder", e))?
        .ok_or_else(|| AppError::not_found(format!("Folder {} not found", folder.id)))
    }

    /// Delete a folder permanently. Returns `true` if deleted.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete folder", e))?;
        Ok(result.rows_affected() > 0)
    }
}
