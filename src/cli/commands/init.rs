//! Init command - create the index and apply its settings

use crate::cli::output::print_status;
use crate::cli::commands::describe_failure;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {}

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub index: String,
    pub ready: bool,
}

/// Execute the init command
pub async fn execute(
    _args: InitArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    services
        .indexer
        .initialize_index()
        .await
        .map_err(|e| describe_failure("Failed to initialize", &e))?;

    let response = InitResponse {
        index: services.engine.index_name().to_string(),
        ready: true,
    };

    print_status(
        &format!("Index '{}' ready", response.index),
        &response,
        format,
    )?;

    Ok(())
}
