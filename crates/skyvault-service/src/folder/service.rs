//! Folder creation, listing, and trash flags.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use skyvault_core::error::AppError;
use skyvault_database::repositories::folder::FolderRepository;
use skyvault_entity::folder::{Folder, NewFolder};

/// Handles folder operations.
///
/// Folders form a tree per owner rooted at the `None` parent sentinel.
/// Nesting depth is unbounded. Folder trash is a flag only — emptying
/// the trash never purges folders.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Creates a folder.
    ///
    /// The parent must be the root sentinel or an existing folder owned
    /// by the same user.
    pub async fn create_folder(&self, req: NewFolder) -> Result<Folder, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        if let Some(parent_id) = req.parent_id {
            let parent = self
                .folder_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
            if parent.owner_id != req.owner_id {
                return Err(AppError::validation(
                    "Parent folder belongs to a different user",
                ));
            }
        }

        let now = Utc::now();
        let folder = Folder {
            id: Uuid::new_v4(),
            name: req.name,
            parent_id: req.parent_id,
            owner_id: req.owner_id,
            is_trashed: false,
            trashed_at: None,
            created_at: now,
            updated_at: now,
        };

        self.folder_repo.create(&folder).await?;

        info!(
            folder_id = %folder.id,
            owner_id = %folder.owner_id,
            "Folder created"
        );

        Ok(folder)
    }

    /// Lists non-trashed folders directly under `parent_id` for one owner.
    pub async fn list_folders(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> Result<Vec<Folder>, AppError> {
        self.folder_repo
            .find_by_parent_and_owner(owner_id, parent_id)
            .await
    }

    /// Moves a folder to the trash. No-ops when the folder does not exist.
    pub async fn trash_folder(&self, folder_id: Uuid) -> Result<(), AppError> {
        let Some(mut folder) = self.folder_repo.find_by_id(folder_id).await? else {
            return Ok(());
        };

        let now = Utc::now();
        folder.is_trashed = true;
        folder.trashed_at = Some(now);
        folder.updated_at = now;

        self.folder_repo.update(&folder).await?;

        info!(folder_id = %folder_id, "Folder trashed");

        Ok(())
    }

    /// Restores a folder from the trash. No-ops when the folder does not
    /// exist.
    pub async fn restore_folder(&self, folder_id: Uuid) -> Result<(), AppError> {
        let Some(mut folder) = self.folder_repo.find_by_id(folder_id).await? else {
            return Ok(());
        };

        folder.is_trashed = false;
        folder.trashed_at = None;
        folder.updated_at = Utc::now();

        self.folder_repo.update(&folder).await?;

        info!(folder_id = %folder_id, "Folder restored");

        Ok(())
    }
}
