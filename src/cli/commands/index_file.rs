//! Index-file command - index one file with its content

use crate::cli::output::{colors, format_bytes};
use crate::cli::commands::describe_failure;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the index-file command
#[derive(Args, Debug)]
pub struct IndexFileArgs {
    /// File to index
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct IndexFileResponse {
    pub id: String,
    pub path: String,
    pub size: i64,
    pub content_hash: String,
}

/// Execute the index-file command
pub async fn execute(
    args: IndexFileArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = services
        .indexer
        .index_file(&args.path)
        .await
        .map_err(|e| {
            describe_failure(&format!("Failed to index '{}'", args.path.display()), &e)
        })?;

    let response = IndexFileResponse {
        id: document.id,
        path: document.path,
        size: document.size,
        content_hash: document.content_hash,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} ({})",
                colors::success("Indexed"),
                colors::file_path(&response.path),
                format_bytes(response.size.max(0) as u64)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
