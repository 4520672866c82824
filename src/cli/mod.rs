//! CLI adapter for memex
//!
//! Provides the command-line interface over `core/`: initializing the
//! engine collection, indexing files and directories, and searching.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// memex - local file search
///
/// Indexes files on disk into a local search engine and queries them.
#[derive(Parser, Debug)]
#[command(name = "memex")]
#[command(version)]
#[command(about = "Index local files and search them", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the index and apply its settings
    Init(commands::InitArgs),

    /// Index every eligible file in a directory
    Index(commands::IndexArgs),

    /// Index a single file
    #[command(name = "index-file")]
    IndexFile(commands::IndexFileArgs),

    /// Search indexed files
    Search(commands::SearchArgs),

    /// Delete all documents from the index
    #[command(name = "clear-index")]
    ClearIndex(commands::ClearArgs),

    /// Check whether the search engine is reachable
    Health(commands::HealthArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  memex completions bash > ~/.local/share/bash-completion/completions/memex
    ///   zsh:   memex completions zsh > ~/.zfunc/_memex
    ///   fish:  memex completions fish > ~/.config/fish/completions/memex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load()?;
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &services, cli.format).await,
        Commands::Index(args) => commands::index::execute(args, &services, cli.format).await,
        Commands::IndexFile(args) => {
            commands::index_file::execute(args, &services, cli.format).await
        }
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ClearIndex(args) => commands::clear::execute(args, &services, cli.format).await,
        Commands::Health(args) => commands::health::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
