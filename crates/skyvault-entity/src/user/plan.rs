//! Subscription plan enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const GIB: i64 = 1024 * 1024 * 1024;

/// Subscription plan for a user account.
///
/// The plan determines the default storage limit assigned at registration.
/// Quota is advisory only — the engine never rejects an upload for
/// exceeding the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserPlan {
    /// Free tier.
    Free,
    /// Paid individual tier.
    Pro,
    /// Paid organization tier.
    Enterprise,
}

impl UserPlan {
    /// Default storage limit in bytes for this plan.
    pub fn default_storage_limit(&self) -> i64 {
        match self {
            Self::Free => 5 * GIB,
            Self::Pro => 100 * GIB,
            Self::Enterprise => 1024 * GIB,
        }
    }

    /// Return the plan as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for UserPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserPlan {
    type Err = skyvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(skyvault_core::AppError::validation(format!(
                "Invalid plan: '{s}'. Expected one of: free, pro, enterprise"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        assert_eq!(UserPlan::Free.default_storage_limit(), 5 * GIB);
        assert!(UserPlan::Pro.default_storage_limit() > UserPlan::Free.default_storage_limit());
        assert!(
            UserPlan::Enterprise.default_storage_limit() > UserPlan::Pro.default_storage_limit()
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pro".parse::<UserPlan>().unwrap(), UserPlan::Pro);
        assert!("platinum".parse::<UserPlan>().is_err());
    }
}
