//! File repository implementation.
//!
//! Every query selects the metadata columns explicitly so the content
//! payload never rides along with listings; it is only fetched through
//! [`FileRepository::fetch_content`].

use sqlx::SqlitePool;
use uuid::Uuid;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;
use skyvault_entity::file::CloudFile;

const FILE_COLUMNS: &str = "id, name, size, category, parent_id, owner_id, mime_type, \
     storage_key, is_shared, share_token, share_created_at, is_trashed, trashed_at, \
     created_at, updated_at";

/// Repository for the files collection.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: SqlitePool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CloudFile>> {
        sqlx::query_as::<_, CloudFile>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// Fetch a file's content payload.
    pub async fn fetch_content(&self, id: Uuid) -> AppResult<Option<Vec<u8>>> {
        sqlx::query_scalar::<_, Option<Vec<u8>>>("SELECT content FROM files WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.flatten())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch content", e))
    }

    /// List non-trashed files directly under a parent for one owner.
    pub async fn find_by_parent_and_owner(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Vec<CloudFile>> {
        sqlx::query_as::<_, CloudFile>(&format!(
            "SELECT {FILE_COLUMNS} FROM files \
             WHERE owner_id = ? AND parent_id IS ? AND is_trashed = 0"
        ))
        .bind(owner_id)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// List all trashed files for one owner (full scan, no index).
    pub async fn find_trashed_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<CloudFile>> {
        sqlx::query_as::<_, CloudFile>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE owner_id = ? AND is_trashed = 1"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list trashed files", e))
    }

    /// Resolve an active share token (full scan, no index).
    ///
    /// Never returns a trashed file, even when a stale token value is
    /// still present on the row.
    pub async fn find_by_share_token(&self, token: &str) -> AppResult<Option<CloudFile>> {
        sqlx::query_as::<_, CloudFile>(&format!(
            "SELECT {FILE_COLUMNS} FROM files \
             WHERE is_shared = 1 AND share_token = ? AND is_trashed = 0 LIMIT 1"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to resolve share token", e))
    }

    /// List every file in the system.
    pub async fn find_all(&self) -> AppResult<Vec<CloudFile>> {
        sqlx::query_as::<_, CloudFile>(&format!("SELECT {FILE_COLUMNS} FROM files"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Create a new file record together with its content payload.
    pub async fn create(&self, file: &CloudFile, content: &[u8]) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO files (id, name, size, category, parent_id, owner_id, mime_type, \
             storage_key, content, is_shared, share_token, share_created_at, is_trashed, \
             trashed_at, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(file.id)
        .bind(&file.name)
        .bind(file.size)
        .bind(file.category)
        .bind(file.parent_id)
        .bind(file.owner_id)
        .bind(&file.mime_type)
        .bind(&file.storage_key)
        .bind(content)
        .bind(file.is_shared)
        .bind(&file.share_token)
        .bind(file.share_created_at)
        .bind(file.is_trashed)
        .bind(file.trashed_at)
        .bind(file.created_at)
        .bind(file.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))?;
        Ok(())
    }

    /// Update a file's metadata. The content payload is immutable.
    pub async fn update(&self, file: &CloudFile) -> AppResult<CloudFile> {
        sqlx::query_as::<_, CloudFile>(&format!(
            "UPDATE files SET name = ?, parent_id = ?, is_shared = ?, share_token = ?, \
             share_created_at = ?, is_trashed = ?, trashed_at = ?, updated_at = ? \
             WHERE id = ? RETURNING {FILE_COLUMNS}"
        ))
        .bind(&file.name)
        .bind(file.parent_id)
        .bind(file.is_shared)
        .bind(&file.share_token)
        .bind(file.share_created_at)
        .bind(file.is_trashed)
        .bind(file.trashed_at)
        .bind(file.updated_at)
        .bind(file.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update file", e))?
        .ok_or_else(|| AppError::not_found(format!("File {} not found", file.id)))
    }

    /// Delete a file permanently. Returns `true` if deleted.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count total files.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))
    }

    /// Total size of all files in bytes.
    pub async fn total_size_bytes(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(size), 0) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to calculate storage size", e)
            })
    }
}
