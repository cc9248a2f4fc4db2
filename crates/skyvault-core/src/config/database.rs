//! Database configuration.

use serde::{Deserialize, Serialize};

/// SQLite connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_path")]
    pub path: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection acquire timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Busy timeout in milliseconds for locked-database retries.
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            busy_timeout_ms: default_busy_timeout(),
        }
    }
}

fn default_path() -> String {
    "./data/skyvault.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_busy_timeout() -> u64 {
    5000
}
