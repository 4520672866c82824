//! Search command - query indexed files

use crate::cli::output::{colors, format_bytes, format_relative_time, print_json};
use crate::cli::OutputFormat;
use crate::core::search::SearchResponse;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (0 uses the configured default)
    #[arg(long, short = 'k', default_value = "0")]
    pub limit: usize,

    /// Only show file paths
    #[arg(long)]
    pub files_only: bool,
}

/// Execute the search command
///
/// JSON output always carries the response envelope, with a failure
/// reported in its `error` field.
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = services.search.search(&args.query, args.limit).await;

    if format == OutputFormat::Json {
        let response = SearchResponse::from_outcome(&args.query, outcome);
        print_json(&response)?;
        return match response.error {
            Some(error) => Err(error.into()),
            None => Ok(()),
        };
    }

    let result = outcome.map_err(|e| format!("Search failed: {e}"))?;

    if result.hits.is_empty() {
        println!("No results found for '{}'", colors::label(&args.query));
        return Ok(());
    }

    println!(
        "Found {} result(s) in {}ms:\n",
        colors::number(&result.estimated_total_hits.max(result.hits.len() as u64).to_string()),
        result.processing_time_ms
    );

    for (i, hit) in result.hits.iter().enumerate() {
        let document = &hit.document;
        if args.files_only {
            println!("{}", colors::file_path(&document.path));
            continue;
        }
        println!(
            "[{}] {} {}",
            colors::rank(&(i + 1).to_string()),
            colors::file_path(&document.path),
            colors::dim(&format!("(score: {:.2})", hit.ranking_score))
        );
        println!(
            "    {}",
            colors::dim(&format!(
                "{}, modified {}",
                format_bytes(document.size.max(0) as u64),
                format_relative_time(document.mod_time)
            ))
        );
    }

    Ok(())
}
