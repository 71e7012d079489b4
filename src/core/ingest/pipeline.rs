//! Ingestion pipeline orchestration.
//!
//! Coordinates the end-to-end ingestion workflow:
//! 1. Walk directory tree
//! 2. Read file contents
//! 3. Chunk text
//! 4. Embed each chunk
//! 5. Collect records for the vector store
//!
//! Per-file and per-chunk faults are absorbed into summary counters;
//! a provider that keeps failing aborts the run before it can
//! silently produce an empty index.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::core::error::{RagError, Result};
use crate::core::ingest::{Chunker, Scanner};
use crate::core::provider::EmbeddingProvider;
use crate::core::types::{IngestSummary, Record};

/// Orchestrates the ingestion pipeline
#[derive(Debug)]
pub struct IngestPipeline {
    scanner: Scanner,
    chunker: Chunker,

    /// Consecutive embedding failures before failing fast
    fail_fast_threshold: u32,

    /// Per-call provider timeout
    provider_timeout: Duration,
}

impl IngestPipeline {
    /// Create a new ingestion pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidChunkConfig`] for an invalid
    /// chunk size / overlap combination.
    pub fn new(
        chunk_size: usize,
        overlap: usize,
        scanner: Scanner,
        fail_fast_threshold: u32,
        provider_timeout: Duration,
    ) -> Result<Self> {
        let chunker = Chunker::new(chunk_size, overlap)?;

        Ok(Self {
            scanner,
            chunker,
            fail_fast_threshold,
            provider_timeout,
        })
    }

    /// Ingest a directory and return records + summary.
    ///
    /// Errors reading individual files are counted and skipped.
    /// Embedding failures drop the affected chunk with a warning;
    /// after `fail_fast_threshold` consecutive failures the whole
    /// run aborts with [`RagError::ProviderUnavailable`].
    pub async fn run(
        &self,
        root: &Path,
        embedder: &dyn EmbeddingProvider,
    ) -> Result<(Vec<Record>, IngestSummary)> {
        let start = Instant::now();

        tracing::info!("Starting ingestion from {:?}", root);
        let files = self.scanner.collect_files(root)?;
        tracing::info!("Found {} candidate files", files.len());

        let mut records = Vec::new();
        let mut summary = IngestSummary::default();
        let mut consecutive_failures: u32 = 0;
        let mut last_failure = String::new();

        for (idx, file_path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files processed", idx, files.len());
            }

            let contents = match self.scanner.read_text(file_path) {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::warn!("Skipping unreadable file {:?}: {}", file_path, e);
                    summary.files_skipped += 1;
                    continue;
                }
            };

            if contents.is_empty() {
                tracing::debug!("Skipping empty file: {:?}", file_path);
                summary.files_scanned += 1;
                continue;
            }

            let chunks = self.chunker.chunk_text(&contents, file_path);
            summary.files_scanned += 1;

            for chunk in chunks {
                match self.embed_chunk(embedder, &chunk.text).await {
                    Ok(embedding) => {
                        consecutive_failures = 0;
                        summary.chunks_processed += 1;
                        records.push(Record { chunk, embedding });
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Dropping chunk {} of {:?}: {}",
                            chunk.sequence_index,
                            chunk.source,
                            e
                        );
                        summary.chunks_skipped += 1;
                        consecutive_failures += 1;
                        last_failure = e.to_string();

                        if consecutive_failures >= self.fail_fast_threshold {
                            return Err(RagError::ProviderUnavailable {
                                failures: consecutive_failures,
                                message: last_failure,
                            });
                        }
                    }
                }
            }
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Ingestion complete: {} files scanned, {} skipped, {} chunks embedded, \
             {} chunks dropped in {}ms",
            summary.files_scanned,
            summary.files_skipped,
            summary.chunks_processed,
            summary.chunks_skipped,
            summary.duration_ms
        );

        Ok((records, summary))
    }

    /// Embed one chunk under the per-call timeout.
    async fn embed_chunk(&self, embedder: &dyn EmbeddingProvider, text: &str) -> Result<Vec<f32>> {
        match tokio::time::timeout(self.provider_timeout, embedder.embed(text)).await {
            Ok(result) => result,
            Err(_) => Err(RagError::ProviderTimeout(self.provider_timeout.as_secs())),
        }
    }
}
