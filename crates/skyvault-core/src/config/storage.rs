//! Storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Root path prefix used for storage keys when no provider record
    /// has been persisted yet.
    #[serde(default = "default_root_path")]
    pub default_root_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            default_root_path: default_root_path(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_root_path() -> String {
    "skyvault".to_string()
}
