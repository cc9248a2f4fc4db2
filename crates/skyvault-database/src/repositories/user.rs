//! User repository implementation.

use sqlx::SqlitePool;
use uuid::Uuid;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;
use skyvault_entity::user::User;

/// Repository for the users collection.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER(?)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// List all users.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Create a new user record.
    pub async fn create(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO users (id, username, secret, role, plan, storage_used, storage_limit, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.secret)
        .bind(user.role)
        .bind(user.plan)
        .bind(user.storage_used)
        .bind(user.storage_limit)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Username '{}' is already taken", user.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;
        Ok(())
    }

    /// Update a user record.
    pub async fn update(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = ?, secret = ?, role = ?, plan = ?, storage_used = ?, \
             storage_limit = ?, is_active = ?, updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.secret)
        .bind(user.role)
        .bind(user.plan)
        .bind(user.storage_used)
        .bind(user.storage_limit)
        .bind(user.is_active)
        .bind(user.updated_at)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", user.id)))
    }

    /// Delete a user by username. Returns `true` if deleted.
    pub async fn delete_by_username(&self, username: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE LOWER(username) = LOWER(?)")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count total users.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
