//! Storage provider enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The configured storage backend.
///
/// Purely descriptive: the provider selection is a persisted record and
/// has no effect on where content bytes are actually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StorageProvider {
    /// Local storage (the default).
    Local,
    /// Amazon S3.
    Aws,
    /// Wasabi (S3-compatible).
    Wasabi,
    /// Google Drive.
    GoogleDrive,
}

impl StorageProvider {
    /// Return the provider as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Aws => "aws",
            Self::Wasabi => "wasabi",
            Self::GoogleDrive => "google_drive",
        }
    }
}

impl fmt::Display for StorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageProvider {
    type Err = skyvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "aws" => Ok(Self::Aws),
            "wasabi" => Ok(Self::Wasabi),
            "google_drive" => Ok(Self::GoogleDrive),
            _ => Err(skyvault_core::AppError::validation(format!(
                "Invalid provider: '{s}'. Expected one of: local, aws, wasabi, google_drive"
            ))),
        }
    }
}
