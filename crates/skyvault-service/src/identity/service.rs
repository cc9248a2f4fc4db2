//! User registration, authentication, and account management.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use skyvault_core::error::AppError;
use skyvault_database::repositories::user::UserRepository;
use skyvault_entity::user::{NewUser, User, UserPlan, UserRole};

/// Username of the account seeded at startup.
const SEED_ADMIN_USERNAME: &str = "admin";

/// Handles user identity operations.
///
/// Secrets are opaque strings compared by equality. Callers must be able
/// to tell a disabled account apart from bad credentials, so
/// [`IdentityService::authenticate`] reports the former as an error and
/// the latter as `Ok(None)`.
#[derive(Debug, Clone)]
pub struct IdentityService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl IdentityService {
    /// Creates a new identity service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Registers a new user.
    ///
    /// Fails with a conflict when the username is already taken
    /// (case-insensitive).
    pub async fn register(&self, req: NewUser) -> Result<User, AppError> {
        if req.username.trim().is_empty() || req.username.len() < 3 {
            return Err(AppError::validation(
                "Username must be at least 3 characters",
            ));
        }
        if req.secret.is_empty() {
            return Err(AppError::validation("Secret cannot be empty"));
        }

        if self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                req.username
            )));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: req.username,
            secret: req.secret,
            role: req.role,
            plan: req.plan,
            storage_used: 0,
            storage_limit: req
                .storage_limit
                .unwrap_or_else(|| req.plan.default_storage_limit()),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.user_repo.create(&user).await?;

        info!(
            user_id = %user.id,
            username = %user.username,
            role = %user.role,
            plan = %user.plan,
            "User registered"
        );

        Ok(user)
    }

    /// Authenticates a user by username and secret.
    ///
    /// Returns `Ok(None)` on any credential mismatch. Matching credentials
    /// on a deactivated account fail with an account-disabled error so the
    /// caller can show a distinct message.
    pub async fn authenticate(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<Option<User>, AppError> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            return Ok(None);
        };

        if user.secret != secret {
            return Ok(None);
        }

        if !user.is_active {
            return Err(AppError::account_disabled(format!(
                "Account '{username}' is disabled"
            )));
        }

        info!(user_id = %user.id, username = %user.username, "User authenticated");

        Ok(Some(user))
    }

    /// Looks up a user by ID.
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_id(user_id).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }

    /// Updates a user record.
    pub async fn update_user(&self, user: &User) -> Result<User, AppError> {
        let mut user = user.clone();
        user.updated_at = Utc::now();
        let updated = self.user_repo.update(&user).await?;

        info!(user_id = %updated.id, "User updated");

        Ok(updated)
    }

    /// Deletes a user by username.
    ///
    /// Only the user record is removed; the user's files and folders are
    /// left in place (no cascade).
    pub async fn delete_user(&self, username: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete_by_username(username).await?;
        if !deleted {
            return Err(AppError::not_found(format!("User '{username}' not found")));
        }

        info!(username = %username, "User deleted");

        Ok(())
    }

    /// Seeds the built-in admin account.
    ///
    /// Safe to call on every startup: when the account already exists it
    /// is returned unchanged.
    pub async fn seed_admin(&self, secret: &str) -> Result<User, AppError> {
        if let Some(existing) = self.user_repo.find_by_username(SEED_ADMIN_USERNAME).await? {
            return Ok(existing);
        }

        let admin = self
            .register(NewUser {
                username: SEED_ADMIN_USERNAME.to_string(),
                secret: secret.to_string(),
                role: UserRole::Admin,
                plan: UserPlan::Enterprise,
                storage_limit: None,
            })
            .await?;

        info!(user_id = %admin.id, "Admin account seeded");

        Ok(admin)
    }
}
