//! Ingest command - scan, chunk and embed a directory

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::client::{IngestOptions, RagClient};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the ingest command
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Path to the directory to ingest
    pub path: PathBuf,

    /// Characters per chunk (overrides configuration)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between chunks (overrides configuration)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Ingestion result response
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub path: String,
    pub files_scanned: usize,
    pub chunks_processed: usize,
    pub files_skipped: usize,
    pub chunks_skipped: usize,
    pub duration_secs: f64,
}

/// Execute the ingest command
pub async fn execute(
    args: IngestArgs,
    client: &Arc<RagClient>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate path
    let path = args.path.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            args.path.display(),
            e
        )
    })?;

    if !path.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. Ragstore ingests directories, not individual files.",
            path.display()
        )
        .into());
    }

    // Validate chunking overrides
    if let (Some(chunk_size), Some(overlap)) = (args.chunk_size, args.overlap) {
        if overlap >= chunk_size {
            return Err(format!(
                "Overlap ({overlap}) must be less than chunk size ({chunk_size})."
            )
            .into());
        }
    }
    if args.chunk_size == Some(0) {
        return Err("Chunk size must be non-zero.".into());
    }

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Ingesting {}...",
            colors::file_path(&path.display().to_string())
        );
    }

    let summary = client
        .ingest(
            &path,
            IngestOptions {
                chunk_size: args.chunk_size,
                overlap: args.overlap,
            },
        )
        .await?;

    let response = IngestResponse {
        path: path.to_string_lossy().into_owned(),
        files_scanned: summary.files_scanned,
        chunks_processed: summary.chunks_processed,
        files_skipped: summary.files_skipped,
        chunks_skipped: summary.chunks_skipped,
        duration_secs: summary.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files ({} chunks) in {}",
                colors::success("Ingested"),
                colors::number(&response.files_scanned.to_string()),
                colors::number(&response.chunks_processed.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            if response.files_skipped > 0 || response.chunks_skipped > 0 {
                print_warning(&format!(
                    "skipped {} file(s), {} chunk(s)",
                    response.files_skipped, response.chunks_skipped
                ));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
