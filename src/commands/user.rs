//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use skyvault_core::error::AppError;
use skyvault_database::repositories::user::UserRepository;
use skyvault_entity::user::{NewUser, UserPlan, UserRole};
use skyvault_service::IdentityService;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Register {
        /// Username
        username: String,
        /// Login secret (prompted when omitted)
        #[arg(short, long)]
        secret: Option<String>,
        /// Role (admin or user)
        #[arg(short, long, default_value = "user")]
        role: UserRole,
        /// Plan (free, pro, enterprise)
        #[arg(short, long, default_value = "free")]
        plan: UserPlan,
    },
    /// List all users
    List,
    /// Enable a user
    Enable {
        /// Username
        username: String,
    },
    /// Disable a user
    Disable {
        /// Username
        username: String,
    },
    /// Delete a user (files are not cascaded)
    Delete {
        /// Username
        username: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Role
    role: String,
    /// Plan
    plan: String,
    /// Used bytes
    storage_used: i64,
    /// Limit bytes
    storage_limit: i64,
    /// Active flag
    active: bool,
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let identity = IdentityService::new(Arc::new(UserRepository::new(pool.clone())));

    match &args.command {
        UserCommand::Register {
            username,
            secret,
            role,
            plan,
        } => {
            let secret = match secret {
                Some(s) => s.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Secret")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Failed to read secret: {e}")))?,
            };

            let user = identity
                .register(NewUser {
                    username: username.clone(),
                    secret,
                    role: *role,
                    plan: *plan,
                    storage_limit: None,
                })
                .await?;

            output::print_success(&format!("User '{}' registered ({})", user.username, user.id));
        }
        UserCommand::List => {
            let users = identity.list_users().await?;
            let rows: Vec<UserRow> = users
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    username: u.username.clone(),
                    role: u.role.to_string(),
                    plan: u.plan.to_string(),
                    storage_used: u.storage_used,
                    storage_limit: u.storage_limit,
                    active: u.is_active,
                })
                .collect();

            output::print_list(&rows, format);
        }
        UserCommand::Enable { username } => {
            set_active(&identity, username, true).await?;
            output::print_success(&format!("User '{}' enabled", username));
        }
        UserCommand::Disable { username } => {
            set_active(&identity, username, false).await?;
            output::print_success(&format!("User '{}' disabled", username));
        }
        UserCommand::Delete { username } => {
            identity.delete_user(username).await?;
            output::print_success(&format!("User '{}' deleted", username));
        }
    }

    Ok(())
}

/// Flip the active flag on a user looked up by name
async fn set_active(
    identity: &IdentityService,
    username: &str,
    active: bool,
) -> Result<(), AppError> {
    let users = identity.list_users().await?;
    let mut user = users
        .into_iter()
        .find(|u| u.username.eq_ignore_ascii_case(username))
        .ok_or_else(|| AppError::not_found(format!("User '{}' not found", username)))?;

    user.is_active = active;
    identity.update_user(&user).await?;
    Ok(())
}
