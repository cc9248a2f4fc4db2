//! File management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use skyvault_core::error::AppError;
use skyvault_entity::file::CloudFile;

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// List a user's files in a folder
    List {
        /// Owner user ID
        #[arg(short, long)]
        owner: Uuid,
        /// Folder ID (top level when omitted)
        #[arg(short, long)]
        parent: Option<Uuid>,
    },
    /// List every file in the system
    ListAll,
    /// Rename a file
    Rename {
        /// File ID
        id: Uuid,
        /// New name
        name: String,
    },
    /// Move a file to the trash
    Trash {
        /// File ID
        id: Uuid,
    },
    /// Restore a file from the trash
    Restore {
        /// File ID
        id: Uuid,
    },
    /// Permanently delete a file
    Purge {
        /// File ID
        id: Uuid,
    },
}

/// File display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// File ID
    pub id: String,
    /// Name
    pub name: String,
    /// Size in bytes
    pub size: i64,
    /// Category
    pub category: String,
    /// Shared flag
    pub shared: bool,
    /// Trashed flag
    pub trashed: bool,
}

impl From<&CloudFile> for FileRow {
    fn from(f: &CloudFile) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            size: f.size,
            category: f.category.to_string(),
            shared: f.is_shared,
            trashed: f.is_trashed,
        }
    }
}

/// Execute file commands
pub async fn execute(args: &FileArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let files = super::file_service(&pool);

    match &args.command {
        FileCommand::List { owner, parent } => {
            let listing = files.list(*owner, *parent).await?;
            let rows: Vec<FileRow> = listing.iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
        }
        FileCommand::ListAll => {
            let listing = files.list_all().await?;
            let rows: Vec<FileRow> = listing.iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
        }
        FileCommand::Rename { id, name } => {
            let file = files.rename(*id, name).await?;
            output::print_success(&format!("Renamed to '{}'", file.name));
        }
        FileCommand::Trash { id } => {
            files.trash(*id).await?;
            output::print_success("File moved to trash");
        }
        FileCommand::Restore { id } => {
            files.restore(*id).await?;
            output::print_success("File restored");
        }
        FileCommand::Purge { id } => {
            files.purge(*id).await?;
            output::print_success("File permanently deleted");
        }
    }

    Ok(())
}
