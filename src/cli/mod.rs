//! CLI adapter for Ragstore
//!
//! Provides a command-line interface over the core retrieval engine.
//! This module depends on `core/` only; outer adapters (HTTP, MCP)
//! would sit next to it, not on top of it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              |  (clap adapter)  |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Ragstore - Local RAG Engine
///
/// A retrieval-augmented generation engine over local files. Ingest a
/// directory into a vector store, then ask questions answered from
/// the most similar chunks.
#[derive(Parser, Debug)]
#[command(name = "ragstore")]
#[command(version)]
#[command(about = "Local RAG engine over your files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest a directory into the vector store
    Ingest(commands::IngestArgs),

    /// Ask a question answered from the indexed content
    Query(commands::QueryArgs),

    /// Show vector store statistics
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  ragstore completions bash > ~/.local/share/bash-completion/completions/ragstore
    ///   zsh:   ragstore completions zsh > ~/.zfunc/_ragstore
    ///   fish:  ragstore completions fish > ~/.config/fish/completions/ragstore.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::client::RagClient;
    use crate::core::config::Config;
    use crate::core::provider::{
        embedding_provider, generation_provider, EmbeddingKind, GenerationKind,
    };
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need a client)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;

    // show-config needs no providers or store
    if let Commands::ShowConfig(args) = cli.command {
        return commands::config::execute(args, &config, cli.format);
    }

    // Resolve providers from configuration
    let embedding_kind: EmbeddingKind = config.provider.embedding.parse()?;
    let generation_kind: GenerationKind = config.provider.generation.parse()?;

    let client = Arc::new(RagClient::new(
        config,
        embedding_provider(embedding_kind),
        generation_provider(generation_kind),
    )?);

    // Execute command
    match cli.command {
        Commands::Ingest(args) => commands::ingest::execute(args, &client, cli.format).await,
        Commands::Query(args) => commands::query::execute(args, &client, cli.format).await,
        Commands::Stats(args) => commands::stats::execute(args, &client, cli.format).await,
        Commands::ShowConfig(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
