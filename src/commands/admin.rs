//! Administrative maintenance CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use crate::output;
use skyvault_core::error::AppError;
use skyvault_database::repositories::user::UserRepository;
use skyvault_service::IdentityService;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Seed the built-in admin account (idempotent)
    Seed {
        /// Admin secret (prompted when omitted)
        #[arg(short, long)]
        secret: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let identity = IdentityService::new(Arc::new(UserRepository::new(pool.clone())));

    match &args.command {
        AdminCommand::Seed { secret } => {
            let secret = match secret {
                Some(s) => s.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin secret")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Failed to read secret: {e}")))?,
            };

            let admin = identity.seed_admin(&secret).await?;
            output::print_success(&format!("Admin account ready ({})", admin.id));
        }
    }

    Ok(())
}
