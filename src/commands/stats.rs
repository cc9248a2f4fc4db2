//! System statistics CLI command.

use std::sync::Arc;

use clap::Args;

use crate::output::{self, OutputFormat};
use skyvault_core::error::AppError;
use skyvault_database::repositories::file::FileRepository;
use skyvault_database::repositories::user::UserRepository;
use skyvault_service::StatsService;

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {}

/// Execute the stats command
pub async fn execute(_args: &StatsArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let stats = StatsService::new(
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(FileRepository::new(pool.clone())),
    );

    let snapshot = stats.system_stats().await?;

    match format {
        OutputFormat::Json => output::print_item(&snapshot, format),
        OutputFormat::Table => {
            output::print_kv("users", &snapshot.total_users.to_string());
            output::print_kv("files", &snapshot.total_files.to_string());
            output::print_kv("storage bytes", &snapshot.total_storage.to_string());
            output::print_kv("images", &snapshot.breakdown.images.to_string());
            output::print_kv("videos", &snapshot.breakdown.videos.to_string());
            output::print_kv("documents", &snapshot.breakdown.documents.to_string());
            output::print_kv("audio", &snapshot.breakdown.audio.to_string());
            output::print_kv("archives", &snapshot.breakdown.archives.to_string());
            output::print_kv("other", &snapshot.breakdown.other.to_string());
        }
    }

    Ok(())
}
