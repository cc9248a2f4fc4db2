//! Share link CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use skyvault_core::error::AppError;
use skyvault_database::repositories::file::FileRepository;
use skyvault_service::{LinkService, ShareService};

/// Arguments for share commands
#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Share subcommand
    #[command(subcommand)]
    pub command: ShareCommand,
}

/// Share subcommands
#[derive(Debug, Subcommand)]
pub enum ShareCommand {
    /// Enable sharing on a file and print the link token
    Enable {
        /// File ID
        id: Uuid,
    },
    /// Disable sharing on a file
    Disable {
        /// File ID
        id: Uuid,
    },
    /// Resolve a share token to its file
    Resolve {
        /// Share token
        token: String,
    },
}

/// Execute share commands
pub async fn execute(args: &ShareArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let shares = ShareService::new(Arc::new(FileRepository::new(pool.clone())));

    match &args.command {
        ShareCommand::Enable { id } => {
            let token = LinkService::new().generate_token();
            shares.set_share(*id, true, Some(token.clone())).await?;
            output::print_success("Sharing enabled");
            output::print_kv("token", &token);
        }
        ShareCommand::Disable { id } => {
            shares.set_share(*id, false, None).await?;
            output::print_success("Sharing disabled");
        }
        ShareCommand::Resolve { token } => match shares.resolve(token).await? {
            Some(file) => output::print_item(&file, format),
            None => println!("No file matches this token."),
        },
    }

    Ok(())
}
