//! Upload CLI command.

use std::path::PathBuf;

use clap::Args;
use uuid::Uuid;

use crate::output::{self, OutputFormat};
use skyvault_core::error::AppError;
use skyvault_entity::file::NewFile;

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Path of the local file to upload
    pub path: PathBuf,

    /// Owner user ID
    #[arg(short, long)]
    pub owner: Uuid,

    /// Destination folder ID (top level when omitted)
    #[arg(short, long)]
    pub parent: Option<Uuid>,

    /// Override the stored file name
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Execute the upload command
pub async fn execute(args: &UploadArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::open_pool(&config).await?;
    let files = super::file_service(&pool);

    let content = std::fs::read(&args.path)?;
    let name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AppError::validation("Path has no file name"))?,
    };
    let mime_type = mime_guess::from_path(&args.path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    let file = files
        .upload(
            NewFile {
                name,
                size: content.len() as i64,
                mime_type,
                parent_id: args.parent,
                owner_id: args.owner,
            },
            &content,
        )
        .await?;

    output::print_success(&format!("Uploaded '{}' ({})", file.name, file.id));
    output::print_item(&file, format);

    Ok(())
}
