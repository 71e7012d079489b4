//! Show-config command - display the resolved configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Ingestion"));
            println!(
                "  Chunk size:    {} chars",
                colors::number(&config.ingestion.chunk_size.to_string())
            );
            println!(
                "  Overlap:       {} chars",
                colors::number(&config.ingestion.overlap.to_string())
            );
            println!(
                "  Max file size: {} MB",
                colors::number(&config.ingestion.max_file_size_mb.to_string())
            );
            println!(
                "  Extensions:    {}",
                colors::dim(&config.ingestion.allowed_extensions.join(", "))
            );

            println!("{}", colors::label("Storage"));
            println!(
                "  Snapshot: {}",
                colors::file_path(&config.storage.snapshot_path.display().to_string())
            );

            println!("{}", colors::label("Search"));
            println!(
                "  Default top_k: {}",
                colors::number(&config.search.default_top_k.to_string())
            );
            println!(
                "  Max top_k:     {}",
                colors::number(&config.search.max_top_k.to_string())
            );

            println!("{}", colors::label("Limits"));
            println!(
                "  Provider timeout:    {}s",
                colors::number(&config.limits.provider_timeout_sec.to_string())
            );
            println!(
                "  Fail-fast threshold: {}",
                colors::number(&config.limits.fail_fast_threshold.to_string())
            );

            println!("{}", colors::label("Providers"));
            println!("  Embedding:  {}", config.provider.embedding);
            println!("  Generation: {}", config.provider.generation);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }

    Ok(())
}
