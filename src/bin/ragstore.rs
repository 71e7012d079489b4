//! Ragstore CLI - Command-line interface for the local RAG engine
//!
//! # Examples
//!
//! ```bash
//! # Ingest a directory
//! ragstore ingest /path/to/project
//!
//! # Ask a question
//! ragstore query "how does authentication work"
//!
//! # Inspect the store
//! ragstore stats
//!
//! # Show configuration
//! ragstore show-config
//! ```

use clap::Parser;
use ragstore::cli::{output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
