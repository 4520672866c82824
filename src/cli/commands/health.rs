//! Health command - check whether the engine answers

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub url: String,
    pub index: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_indexing: Option<bool>,
}

/// Execute the health command
///
/// Exits with an error when the engine is unhealthy so scripts can
/// poll on it.
pub async fn execute(
    _args: HealthArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let healthy = services.engine.health_check().await;
    let stats = if healthy {
        services.engine.index().stats().await.ok()
    } else {
        None
    };

    let response = HealthResponse {
        url: services.engine.base_url().to_string(),
        index: services.engine.index_name().to_string(),
        healthy,
        documents: stats.as_ref().map(|s| s.number_of_documents),
        is_indexing: stats.as_ref().map(|s| s.is_indexing),
    };

    match format {
        OutputFormat::Human => {
            if healthy {
                println!(
                    "{} {} ({})",
                    colors::success("Engine is running at"),
                    response.url,
                    colors::dim(&response.index)
                );
                if let Some(count) = response.documents {
                    println!("Documents: {}", colors::number(&count.to_string()));
                }
                if response.is_indexing == Some(true) {
                    println!("{}", colors::dim("Indexing in progress"));
                }
            } else {
                println!(
                    "{} {}",
                    colors::error("Engine is not reachable at"),
                    response.url
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    if !healthy {
        return Err("search engine is not running".into());
    }

    Ok(())
}
