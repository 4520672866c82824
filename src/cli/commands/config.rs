//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::policy;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list the built-in extension and directory tables
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub engine: EngineView,
    pub ignore_patterns: Vec<String>,
    pub search: SearchView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyView>,
}

#[derive(Debug, Serialize)]
pub struct EngineView {
    pub url: String,
    pub index_name: String,
    pub api_key_set: bool,
    pub task_timeout_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchView {
    pub default_limit: usize,
    pub max_limit: usize,
}

#[derive(Debug, Serialize)]
pub struct PolicyView {
    pub allowed_extensions: Vec<&'static str>,
    pub metadata_only_extensions: Vec<&'static str>,
    pub ignored_directories: Vec<&'static str>,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let config_file = std::env::var("MEMEX_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| XdgDirs::new().config_file());

    let response = ConfigResponse {
        config_file: config_file.to_string_lossy().into_owned(),
        engine: EngineView {
            url: config.engine.url.clone(),
            index_name: config.engine.index_name.clone(),
            api_key_set: config.engine.api_key.is_some(),
            task_timeout_ms: config.engine.task_timeout_ms,
        },
        ignore_patterns: config.indexing.ignore_patterns.clone(),
        search: SearchView {
            default_limit: config.search.default_limit,
            max_limit: config.search.max_limit,
        },
        policy: args.all.then(|| PolicyView {
            allowed_extensions: policy::allowed_extensions(),
            metadata_only_extensions: policy::metadata_only_extensions(),
            ignored_directories: policy::ignored_directories(),
        }),
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            println!("  config_file: {}", response.config_file);
            println!("  engine:");
            println!("    url: {}", response.engine.url);
            println!("    index_name: {}", response.engine.index_name);
            println!("    api_key: {}", if response.engine.api_key_set { "set" } else { "unset" });
            println!("    task_timeout_ms: {}", response.engine.task_timeout_ms);
            println!("  indexing:");
            println!("    ignore_patterns: {:?}", response.ignore_patterns);
            println!("  search:");
            println!("    default_limit: {}", response.search.default_limit);
            println!("    max_limit: {}", response.search.max_limit);

            if let Some(policy) = &response.policy {
                println!("  policy:");
                println!("    allowed_extensions: {}", policy.allowed_extensions.join(" "));
                println!(
                    "    metadata_only_extensions: {}",
                    policy.metadata_only_extensions.join(" ")
                );
                println!("    ignored_directories: {}", policy.ignored_directories.join(" "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
