//! Quota accounting over the users collection.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use skyvault_core::error::AppError;
use skyvault_database::repositories::user::UserRepository;

/// Tracks each user's cumulative consumed bytes.
///
/// An adjustment is a read-modify-write pair over the user record.
/// Updates to one user must be serializable, so adjustments take a
/// per-user async lock for the duration of the pair; adjustments for
/// different users proceed independently.
#[derive(Debug, Clone)]
pub struct QuotaAccountant {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// One lock per user id, created on first use.
    locks: Arc<Mutex<HashMap<Uuid, Arc<Mutex<()>>>>>,
}

impl QuotaAccountant {
    /// Creates a new quota accountant.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self {
            user_repo,
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Adjusts a user's consumed bytes by `delta_bytes` (may be negative).
    ///
    /// A missing user is not an error: the adjustment silently no-ops so
    /// that cleanup paths holding a stale reference cannot fail. The
    /// result is never clamped — a negative balance is written back as-is
    /// and logged as a bug signal.
    pub async fn adjust_usage(&self, user_id: Uuid, delta_bytes: i64) -> Result<(), AppError> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let Some(mut user) = self.user_repo.find_by_id(user_id).await? else {
            debug!(%user_id, delta_bytes, "Quota adjustment skipped: user not found");
            return Ok(());
        };

        user.storage_used += delta_bytes;
        user.updated_at = Utc::now();

        if user.storage_used < 0 {
            warn!(
                %user_id,
                storage_used = user.storage_used,
                "Storage accounting went negative"
            );
        }

        self.user_repo.update(&user).await?;

        debug!(
            %user_id,
            delta_bytes,
            storage_used = user.storage_used,
            "Quota adjusted"
        );

        Ok(())
    }

    /// Returns the lock guarding adjustments for one user.
    async fn user_lock(&self, user_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
