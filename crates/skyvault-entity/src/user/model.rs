//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::plan::UserPlan;
use super::role::UserRole;

/// A registered user in the SkyVault system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Opaque login secret, compared by equality.
    #[serde(skip_serializing)]
    pub secret: String,
    /// User role.
    pub role: UserRole,
    /// Subscription plan.
    pub plan: UserPlan,
    /// Cumulative bytes consumed by this user's files (trashed included).
    pub storage_used: i64,
    /// Advisory storage limit in bytes.
    pub storage_limit: i64,
    /// Whether the account may log in.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Remaining storage in bytes, saturating at zero.
    pub fn storage_remaining(&self) -> i64 {
        (self.storage_limit - self.storage_used).max(0)
    }
}

/// Data required to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Login secret.
    pub secret: String,
    /// Assigned role.
    pub role: UserRole,
    /// Subscription plan.
    pub plan: UserPlan,
    /// Storage limit override in bytes (plan default when `None`).
    pub storage_limit: Option<i64>,
}
