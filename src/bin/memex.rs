//! memex - index local files into a search engine and query them
//!
//! # Examples
//!
//! ```bash
//! # Create the index and apply its settings
//! memex init
//!
//! # Index a directory, skipping logs and a private folder
//! memex index ~/projects --ignore "*.log,~/projects/private"
//!
//! # Search
//! memex search "connection pool"
//! ```

use clap::Parser;
use memex::cli::output::print_error;
use memex::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memex=warn"));

    // stderr only: stdout carries command output, including --format json
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if std::env::var("MEMEX_LOG_FORMAT").is_ok_and(|v| v == "json") {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
