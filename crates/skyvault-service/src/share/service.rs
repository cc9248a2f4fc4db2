//! Share enablement and token resolution.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use skyvault_core::error::AppError;
use skyvault_database::repositories::file::FileRepository;
use skyvault_entity::file::CloudFile;

/// Manages per-file share state and anonymous token resolution.
///
/// Unlike the trash transitions, share toggles are strict: referencing a
/// missing file is an error, so a user-visible toggle can never silently
/// no-op.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// File repository.
    file_repo: Arc<FileRepository>,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(file_repo: Arc<FileRepository>) -> Self {
        Self { file_repo }
    }

    /// Enables or disables sharing on a file.
    ///
    /// Enabling stores the caller-generated token and stamps the share
    /// time; disabling clears all share state. Fails with not-found when
    /// the file does not exist, and refuses to enable sharing on a
    /// trashed file (trash and sharing are mutually exclusive).
    pub async fn set_share(
        &self,
        file_id: Uuid,
        enabled: bool,
        token: Option<String>,
    ) -> Result<CloudFile, AppError> {
        let mut file = self
            .file_repo
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if enabled {
            if file.is_trashed {
                return Err(AppError::conflict("Cannot share a trashed file"));
            }
            let token =
                token.ok_or_else(|| AppError::validation("A share token is required"))?;
            file.is_shared = true;
            file.share_token = Some(token);
            file.share_created_at = Some(Utc::now());
        } else {
            file.is_shared = false;
            file.share_token = None;
            file.share_created_at = None;
        }

        file.updated_at = Utc::now();
        let file = self.file_repo.update(&file).await?;

        info!(file_id = %file_id, enabled, "Share state changed");

        Ok(file)
    }

    /// Resolves a share token to its file.
    ///
    /// Returns `None` (not an error) for unknown or revoked tokens, and
    /// never returns a trashed file even when its token field is stale.
    pub async fn resolve(&self, token: &str) -> Result<Option<CloudFile>, AppError> {
        self.file_repo.find_by_share_token(token).await
    }
}
