//! Storage backend configuration CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use skyvault_core::error::AppError;
use skyvault_database::repositories::settings::SettingsRepository;
use skyvault_entity::settings::{StorageProvider, StorageSettings};
use skyvault_service::SettingsService;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the active storage backend configuration
    Show,
    /// Select a storage backend and persist its credentials
    SetProvider {
        /// Provider (local, aws, wasabi, google_drive)
        provider: StorageProvider,
        /// Root path prefix for storage keys
        #[arg(long)]
        root_path: Option<String>,
        /// Access key (aws/wasabi)
        #[arg(long)]
        access_key: Option<String>,
        /// Secret key (aws/wasabi)
        #[arg(long)]
        secret_key: Option<String>,
        /// Bucket (aws/wasabi)
        #[arg(long)]
        bucket: Option<String>,
        /// Region (aws/wasabi)
        #[arg(long)]
        region: Option<String>,
        /// Endpoint (wasabi)
        #[arg(long)]
        endpoint: Option<String>,
        /// OAuth client ID (google_drive)
        #[arg(long)]
        client_id: Option<String>,
        /// OAuth client secret (google_drive)
        #[arg(long)]
        client_secret: Option<String>,
        /// OAuth refresh token (google_drive)
        #[arg(long)]
        refresh_token: Option<String>,
    },
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let settings = SettingsService::new(Arc::new(SettingsRepository::new(pool.clone())));

    match &args.command {
        ConfigCommand::Show => {
            let current = settings.get().await?;
            output::print_item(&current, format);
        }
        ConfigCommand::SetProvider {
            provider,
            root_path,
            access_key,
            secret_key,
            bucket,
            region,
            endpoint,
            client_id,
            client_secret,
            refresh_token,
        } => {
            let current = settings.get().await?;
            let updated = settings
                .put(StorageSettings {
                    provider: *provider,
                    root_path: root_path.clone().unwrap_or_else(|| current.root_path.clone()),
                    access_key: access_key.clone(),
                    secret_key: secret_key.clone(),
                    bucket: bucket.clone(),
                    region: region.clone(),
                    endpoint: endpoint.clone(),
                    client_id: client_id.clone(),
                    client_secret: client_secret.clone(),
                    refresh_token: refresh_token.clone(),
                    ..current
                })
                .await?;

            output::print_success(&format!("Provider set to '{}'", updated.provider));
        }
    }

    Ok(())
}
