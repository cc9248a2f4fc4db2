//! Shared test helpers for integration tests.

use std::sync::Arc;

use uuid::Uuid;

use skyvault_database::connection::DatabasePool;
use skyvault_database::repositories::file::FileRepository;
use skyvault_database::repositories::folder::FolderRepository;
use skyvault_database::repositories::settings::SettingsRepository;
use skyvault_database::repositories::user::UserRepository;
use skyvault_entity::file::NewFile;
use skyvault_entity::user::{NewUser, User, UserPlan, UserRole};
use skyvault_service::{
    FileService, FolderService, IdentityService, QuotaAccountant, SettingsService, ShareService,
    StatsService,
};

/// Fully wired engine over a fresh in-memory store.
pub struct TestApp {
    /// Database pool handle.
    pub db: DatabasePool,
    /// User repository for direct assertions.
    pub user_repo: Arc<UserRepository>,
    /// Identity service.
    pub identity: IdentityService,
    /// Quota accountant.
    pub quota: Arc<QuotaAccountant>,
    /// File service.
    pub files: FileService,
    /// Folder service.
    pub folders: FolderService,
    /// Share service.
    pub shares: ShareService,
    /// Settings service.
    pub settings: SettingsService,
    /// Stats service.
    pub stats: StatsService,
}

impl TestApp {
    /// Create a new test application over an in-memory database.
    pub async fn new() -> Self {
        let db = DatabasePool::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        let pool = db.pool().clone();

        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let file_repo = Arc::new(FileRepository::new(pool.clone()));
        let folder_repo = Arc::new(FolderRepository::new(pool.clone()));
        let settings_repo = Arc::new(SettingsRepository::new(pool.clone()));

        let identity = IdentityService::new(Arc::clone(&user_repo));
        let quota = Arc::new(QuotaAccountant::new(Arc::clone(&user_repo)));
        let files = FileService::new(
            Arc::clone(&file_repo),
            Arc::clone(&folder_repo),
            Arc::clone(&user_repo),
            Arc::clone(&settings_repo),
            Arc::clone(&quota),
        );
        let folders = FolderService::new(Arc::clone(&folder_repo));
        let shares = ShareService::new(Arc::clone(&file_repo));
        let settings = SettingsService::new(Arc::clone(&settings_repo));
        let stats = StatsService::new(Arc::clone(&user_repo), Arc::clone(&file_repo));

        Self {
            db,
            user_repo,
            identity,
            quota,
            files,
            folders,
            shares,
            settings,
            stats,
        }
    }

    /// Register a test user and return the record.
    pub async fn create_test_user(&self, username: &str) -> User {
        self.identity
            .register(NewUser {
                username: username.to_string(),
                secret: "password123".to_string(),
                role: UserRole::User,
                plan: UserPlan::Free,
                storage_limit: None,
            })
            .await
            .expect("Failed to register test user")
    }

    /// Upload a small text file for a user and return the record.
    pub async fn upload_text(
        &self,
        owner_id: Uuid,
        name: &str,
        content: &str,
    ) -> skyvault_entity::file::CloudFile {
        self.files
            .upload(
                NewFile {
                    name: name.to_string(),
                    size: content.len() as i64,
                    mime_type: "text/plain".to_string(),
                    parent_id: None,
                    owner_id,
                },
                content.as_bytes(),
            )
            .await
            .expect("Failed to upload test file")
    }

    /// Read back a user's current storage usage.
    pub async fn storage_used(&self, user_id: Uuid) -> i64 {
        self.user_repo
            .find_by_id(user_id)
            .await
            .expect("Failed to load user")
            .expect("User missing")
            .storage_used
    }
}
