//! System-wide statistics for the admin surface.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use skyvault_core::error::AppError;
use skyvault_database::repositories::file::FileRepository;
use skyvault_database::repositories::user::UserRepository;

/// Illustrative category proportions applied to the total file count.
///
/// The breakdown is a fixed proportional split, not a per-category
/// group-by; the remainder after rounding lands in `other`.
const IMAGE_SHARE: f64 = 0.35;
const VIDEO_SHARE: f64 = 0.25;
const DOCUMENT_SHARE: f64 = 0.20;
const AUDIO_SHARE: f64 = 0.10;
const ARCHIVE_SHARE: f64 = 0.05;

/// Approximate file counts per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Image files.
    pub images: i64,
    /// Video files.
    pub videos: i64,
    /// Document files.
    pub documents: i64,
    /// Audio files.
    pub audio: i64,
    /// Archive files.
    pub archives: i64,
    /// Everything else.
    pub other: i64,
}

/// Aggregate statistics across all users and files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStats {
    /// Number of registered users.
    pub total_users: i64,
    /// Number of files (trashed included).
    pub total_files: i64,
    /// Sum of all file sizes in bytes.
    pub total_storage: i64,
    /// Approximate per-category split of the file count.
    pub breakdown: CategoryBreakdown,
}

/// Computes system statistics via full scans over users and files.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// File repository.
    file_repo: Arc<FileRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(user_repo: Arc<UserRepository>, file_repo: Arc<FileRepository>) -> Self {
        Self {
            user_repo,
            file_repo,
        }
    }

    /// Computes system-wide statistics.
    pub async fn system_stats(&self) -> Result<SystemStats, AppError> {
        let total_users = self.user_repo.count_all().await?;
        let total_files = self.file_repo.count_all().await?;
        let total_storage = self.file_repo.total_size_bytes().await?;

        Ok(SystemStats {
            total_users,
            total_files,
            total_storage,
            breakdown: breakdown_for(total_files),
        })
    }
}

/// Splits the file count into the fixed illustrative proportions.
///
/// Shares are truncated so the remainder always lands in `other` and the
/// parts sum exactly to the total.
fn breakdown_for(total_files: i64) -> CategoryBreakdown {
    let share = |fraction: f64| (total_files as f64 * fraction).floor() as i64;

    let images = share(IMAGE_SHARE);
    let videos = share(VIDEO_SHARE);
    let documents = share(DOCUMENT_SHARE);
    let audio = share(AUDIO_SHARE);
    let archives = share(ARCHIVE_SHARE);
    let other = total_files - images - videos - documents - audio - archives;

    CategoryBreakdown {
        images,
        videos,
        documents,
        audio,
        archives,
        other,
    }
}
