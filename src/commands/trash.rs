//! Trash CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crate::commands::file::FileRow;
use crate::output::{self, OutputFormat};
use skyvault_core::error::AppError;

/// Arguments for trash commands
#[derive(Debug, Args)]
pub struct TrashArgs {
    /// Trash subcommand
    #[command(subcommand)]
    pub command: TrashCommand,
}

/// Trash subcommands
#[derive(Debug, Subcommand)]
pub enum TrashCommand {
    /// List a user's trashed files and folders
    List {
        /// Owner user ID
        #[arg(short, long)]
        owner: Uuid,
    },
    /// Permanently delete every trashed file of a user
    Empty {
        /// Owner user ID
        #[arg(short, long)]
        owner: Uuid,
    },
}

/// Folder display row for table output
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
}

/// Execute trash commands
pub async fn execute(args: &TrashArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let files = super::file_service(&pool);

    match &args.command {
        TrashCommand::List { owner } => {
            let trash = files.get_trashed(*owner).await?;

            let file_rows: Vec<FileRow> = trash.files.iter().map(FileRow::from).collect();
            output::print_list(&file_rows, format);

            let folder_rows: Vec<FolderRow> = trash
                .folders
                .iter()
                .map(|f| FolderRow {
                    id: f.id.to_string(),
                    name: f.name.clone(),
                })
                .collect();
            if !folder_rows.is_empty() {
                output::print_list(&folder_rows, format);
            }
        }
        TrashCommand::Empty { owner } => {
            let purged = files.empty_trash(*owner).await?;
            output::print_success(&format!("Purged {} file(s)", purged));
        }
    }

    Ok(())
}
