//! Core file operations: upload, listing, and the trash lifecycle.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skyvault_core::error::AppError;
use skyvault_database::repositories::file::FileRepository;
use skyvault_database::repositories::folder::FolderRepository;
use skyvault_database::repositories::settings::SettingsRepository;
use skyvault_database::repositories::user::UserRepository;
use skyvault_entity::file::{CloudFile, FileCategory, NewFile};
use skyvault_entity::folder::Folder;

use crate::quota::QuotaAccountant;

/// A user's trash: trashed files and trashed folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashContents {
    /// Trashed files.
    pub files: Vec<CloudFile>,
    /// Trashed folders.
    pub folders: Vec<Folder>,
}

/// Handles uploads, listings, and the ACTIVE → TRASHED → (PURGED | ACTIVE)
/// lifecycle of files.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Folder repository (for trash listings).
    folder_repo: Arc<FolderRepository>,
    /// User repository (for owner preconditions).
    user_repo: Arc<UserRepository>,
    /// Settings repository (for storage key prefixes).
    settings_repo: Arc<SettingsRepository>,
    /// Quota accountant.
    quota: Arc<QuotaAccountant>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        folder_repo: Arc<FolderRepository>,
        user_repo: Arc<UserRepository>,
        settings_repo: Arc<SettingsRepository>,
        quota: Arc<QuotaAccountant>,
    ) -> Self {
        Self {
            file_repo,
            folder_repo,
            user_repo,
            settings_repo,
            quota,
        }
    }

    /// Uploads a file.
    ///
    /// Store operations run in a fixed order: classify, build the storage
    /// key, charge the owner's quota, persist the record. A record insert
    /// failing after the quota charge leaves the quota overstated — the
    /// charge is not compensated. Quota is advisory: the upload is never
    /// rejected for exceeding the owner's limit.
    pub async fn upload(&self, req: NewFile, content: &[u8]) -> Result<CloudFile, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }
        if req.size < 0 {
            return Err(AppError::validation("File size cannot be negative"));
        }

        let owner = self
            .user_repo
            .find_by_id(req.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found"))?;
        if !owner.is_active {
            return Err(AppError::account_disabled(format!(
                "Account '{}' is disabled",
                owner.username
            )));
        }

        let settings = self.settings_repo.get().await?.unwrap_or_default();
        let category = FileCategory::from_mime(&req.mime_type);
        let storage_key = settings.storage_key_for(&req.name);

        self.quota.adjust_usage(req.owner_id, req.size).await?;

        let now = Utc::now();
        let file = CloudFile {
            id: Uuid::new_v4(),
            name: req.name,
            size: req.size,
            category,
            parent_id: req.parent_id,
            owner_id: req.owner_id,
            mime_type: req.mime_type,
            storage_key,
            is_shared: false,
            share_token: None,
            share_created_at: None,
            is_trashed: false,
            trashed_at: None,
            created_at: now,
            updated_at: now,
        };

        self.file_repo.create(&file, content).await?;

        info!(
            file_id = %file.id,
            owner_id = %file.owner_id,
            size = file.size,
            category = %file.category,
            "File uploaded"
        );

        Ok(file)
    }

    /// Gets a single file's record.
    pub async fn get_file(&self, file_id: Uuid) -> Result<Option<CloudFile>, AppError> {
        self.file_repo.find_by_id(file_id).await
    }

    /// Fetches a file's content payload.
    pub async fn get_content(&self, file_id: Uuid) -> Result<Option<Vec<u8>>, AppError> {
        self.file_repo.fetch_content(file_id).await
    }

    /// Lists non-trashed files directly under `parent_id` for one owner.
    ///
    /// Ordering is store-native; callers needing stable ordering must
    /// sort themselves.
    pub async fn list(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> Result<Vec<CloudFile>, AppError> {
        self.file_repo
            .find_by_parent_and_owner(owner_id, parent_id)
            .await
    }

    /// Lists every file in the system (admin).
    pub async fn list_all(&self) -> Result<Vec<CloudFile>, AppError> {
        self.file_repo.find_all().await
    }

    /// Renames a file. The storage key and category are unaffected.
    pub async fn rename(&self, file_id: Uuid, name: &str) -> Result<CloudFile, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }

        let mut file = self
            .file_repo
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        file.name = name.to_string();
        file.updated_at = Utc::now();
        let file = self.file_repo.update(&file).await?;

        info!(file_id = %file_id, "File renamed");

        Ok(file)
    }

    /// Moves a file to the trash.
    ///
    /// Trashing revokes any active share token — trash is a stronger
    /// state than sharing. No-ops when the file does not exist.
    pub async fn trash(&self, file_id: Uuid) -> Result<(), AppError> {
        let Some(mut file) = self.file_repo.find_by_id(file_id).await? else {
            return Ok(());
        };

        let now = Utc::now();
        file.is_trashed = true;
        file.trashed_at = Some(now);
        file.is_shared = false;
        file.share_token = None;
        file.share_created_at = None;
        file.updated_at = now;

        self.file_repo.update(&file).await?;

        info!(file_id = %file_id, owner_id = %file.owner_id, "File trashed");

        Ok(())
    }

    /// Restores a file from the trash.
    ///
    /// Sharing is not remembered across a trash cycle; a restored file
    /// comes back unshared. No-ops when the file does not exist.
    pub async fn restore(&self, file_id: Uuid) -> Result<(), AppError> {
        let Some(mut file) = self.file_repo.find_by_id(file_id).await? else {
            return Ok(());
        };

        file.is_trashed = false;
        file.trashed_at = None;
        file.updated_at = Utc::now();

        self.file_repo.update(&file).await?;

        info!(file_id = %file_id, owner_id = %file.owner_id, "File restored");

        Ok(())
    }

    /// Permanently deletes a file and releases its quota contribution.
    ///
    /// This is the only irreversible transition and the only one that
    /// affects quota. A delete failing after the quota release leaves the
    /// quota understated — the release is not compensated. No-ops when
    /// the file does not exist.
    pub async fn purge(&self, file_id: Uuid) -> Result<(), AppError> {
        let Some(file) = self.file_repo.find_by_id(file_id).await? else {
            return Ok(());
        };

        self.quota.adjust_usage(file.owner_id, -file.size).await?;
        self.file_repo.delete(file_id).await?;

        info!(
            file_id = %file_id,
            owner_id = %file.owner_id,
            size = file.size,
            "File purged"
        );

        Ok(())
    }

    /// Purges every trashed file owned by `owner_id`, sequentially.
    ///
    /// Sequential on purpose: parallel purges would race their quota
    /// adjustments for the same owner. Trashed folders are left alone.
    pub async fn empty_trash(&self, owner_id: Uuid) -> Result<u64, AppError> {
        let trashed = self.file_repo.find_trashed_by_owner(owner_id).await?;
        let mut purged = 0u64;

        for file in trashed {
            self.purge(file.id).await?;
            purged += 1;
        }

        info!(owner_id = %owner_id, purged, "Trash emptied");

        Ok(purged)
    }

    /// Lists a user's trash: both files and folders.
    pub async fn get_trashed(&self, owner_id: Uuid) -> Result<TrashContents, AppError> {
        let files = self.file_repo.find_trashed_by_owner(owner_id).await?;
        let folders = self.folder_repo.find_trashed_by_owner(owner_id).await?;
        Ok(TrashContents { files, folders })
    }
}
