//! Index command - index a directory tree for search

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::commands::describe_failure;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Directory to index
    pub path: PathBuf,

    /// Patterns to ignore: base-name globs or absolute paths
    /// (comma-separated, can be specified multiple times)
    #[arg(long, short = 'i')]
    pub ignore: Vec<String>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl IndexArgs {
    /// Flatten `--ignore` values into individual patterns
    pub fn ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub path: String,
    pub index: String,
    pub documents_submitted: usize,
    pub files_skipped: usize,
    pub duration_secs: f64,
    pub throughput_files_per_sec: f64,
}

/// Execute the index command
pub async fn execute(
    args: IndexArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let patterns = services.ignore_patterns(&args.ignore_patterns());

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing {} into '{}'...",
            colors::file_path(&args.path.display().to_string()),
            services.engine.index_name()
        );
    }

    let report = services
        .indexer
        .index_directory(&args.path, &patterns)
        .await
        .map_err(|e| {
            describe_failure(&format!("Failed to index '{}'", args.path.display()), &e)
        })?;

    let duration_secs = report.duration_ms as f64 / 1000.0;
    let throughput = if duration_secs > 0.0 {
        report.documents_submitted as f64 / duration_secs
    } else {
        0.0
    };

    let response = IndexResponse {
        path: report.root,
        index: services.engine.index_name().to_string(),
        documents_submitted: report.documents_submitted,
        files_skipped: report.files_skipped,
        duration_secs,
        throughput_files_per_sec: throughput,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files from {} in {}",
                colors::success("Indexed"),
                colors::number(&response.documents_submitted.to_string()),
                colors::file_path(&response.path),
                format_duration(response.duration_secs)
            );
            if response.files_skipped > 0 {
                print_warning(&format!(
                    "{} files could not be read (rerun with RUST_LOG=memex=warn for details)",
                    response.files_skipped
                ));
            }
            if !args.quiet && response.throughput_files_per_sec > 0.0 {
                println!(
                    "{}",
                    colors::dim(&format!(
                        "Throughput: {:.0} files/sec",
                        response.throughput_files_per_sec
                    ))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
