//! CLI command definitions and dispatch.

pub mod admin;
pub mod config;
pub mod file;
pub mod share;
pub mod stats;
pub mod trash;
pub mod upload;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use skyvault_core::config::AppConfig;
use skyvault_core::error::AppError;
use skyvault_database::connection;
use skyvault_database::repositories::file::FileRepository;
use skyvault_database::repositories::folder::FolderRepository;
use skyvault_database::repositories::settings::SettingsRepository;
use skyvault_database::repositories::user::UserRepository;
use skyvault_service::{FileService, QuotaAccountant};

/// SkyVault — personal cloud file storage
#[derive(Debug, Parser)]
#[command(name = "skyvault", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment to load (config/<env>.toml)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User management
    User(user::UserArgs),
    /// Upload a file
    Upload(upload::UploadArgs),
    /// File management
    File(file::FileArgs),
    /// Trash management
    Trash(trash::TrashArgs),
    /// Share link management
    Share(share::ShareArgs),
    /// Storage backend configuration
    Config(config::ConfigArgs),
    /// System statistics
    Stats(stats::StatsArgs),
    /// Administrative maintenance
    Admin(admin::AdminArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
            Commands::Upload(args) => upload::execute(args, &self.env, self.format).await,
            Commands::File(args) => file::execute(args, &self.env, self.format).await,
            Commands::Trash(args) => trash::execute(args, &self.env, self.format).await,
            Commands::Share(args) => share::execute(args, &self.env, self.format).await,
            Commands::Config(args) => config::execute(args, &self.env, self.format).await,
            Commands::Stats(args) => stats::execute(args, &self.env, self.format).await,
            Commands::Admin(args) => admin::execute(args, &self.env).await,
        }
    }
}

/// Helper: load configuration for the given environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: open the process-wide database pool
pub async fn open_pool(config: &AppConfig) -> Result<sqlx::SqlitePool, AppError> {
    let pool = connection::global(&config.database).await?;
    Ok(pool.pool().clone())
}

/// Helper: build the file service stack over a pool
pub fn file_service(pool: &sqlx::SqlitePool) -> FileService {
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let quota = Arc::new(QuotaAccountant::new(Arc::clone(&user_repo)));
    FileService::new(
        Arc::new(FileRepository::new(pool.clone())),
        Arc::new(FolderRepository::new(pool.clone())),
        user_repo,
        Arc::new(SettingsRepository::new(pool.clone())),
        quota,
    )
}
