//! Clear command - delete all documents from the index

use crate::cli::output::print_status;
use crate::cli::commands::describe_failure;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the clear-index command
#[derive(Args, Debug)]
pub struct ClearArgs {}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub index: String,
    pub cleared: bool,
}

/// Execute the clear-index command
pub async fn execute(
    _args: ClearArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if format == OutputFormat::Human {
        eprintln!("Clearing all documents from index...");
    }

    services
        .indexer
        .clear_index()
        .await
        .map_err(|e| describe_failure("Failed to clear index", &e))?;

    let response = ClearResponse {
        index: services.engine.index_name().to_string(),
        cleared: true,
    };

    print_status("Index cleared successfully", &response, format)?;

    Ok(())
}
