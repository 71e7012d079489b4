//! Stats command - show vector store statistics

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::client::RagClient;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Stats response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_chunks: usize,
    pub embedding_dimension: Option<usize>,
    pub unique_sources: usize,
}

/// Execute the stats command
pub async fn execute(
    _args: StatsArgs,
    client: &Arc<RagClient>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = client.stats();

    let response = StatsResponse {
        total_chunks: stats.total_chunks,
        embedding_dimension: stats.embedding_dimension,
        unique_sources: stats.unique_sources,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Vector store"));
            println!(
                "  Chunks:    {}",
                colors::number(&response.total_chunks.to_string())
            );
            println!(
                "  Sources:   {}",
                colors::number(&response.unique_sources.to_string())
            );
            match response.embedding_dimension {
                Some(dim) => println!("  Dimension: {}", colors::number(&dim.to_string())),
                None => println!("  Dimension: {}", colors::dim("(empty store)")),
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
