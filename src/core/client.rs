//! Client facade for the retrieval engine.
//!
//! Thin coordinator wiring the ingestion pipeline, the vector store
//! and the provider capabilities together. This is the surface outer
//! layers (HTTP, CLI, MCP) consume: `ingest`, `query`, `stats`,
//! `clear_history`.
//!
//! Locking discipline: the store sits behind an `RwLock`. Queries
//! only take the read lock, so they may run in parallel; `append`
//! and `save` happen under a single write guard, so a snapshot can
//! never observe a half-updated collection. Provider calls are
//! awaited outside any lock and always run under the configured
//! timeout.

use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use crate::core::config::Config;
use crate::core::error::{RagError, Result};
use crate::core::ingest::{IngestPipeline, Scanner};
use crate::core::provider::{EmbeddingProvider, GenerationProvider};
use crate::core::store::VectorStore;
use crate::core::types::{Exchange, IngestSummary, QueryOutput, SourceRef, StoreStats};

/// Fixed answer returned when the store holds no records.
///
/// Returned without invoking the generation provider: a contextless
/// LLM call would only produce an ungrounded answer.
pub const NO_INDEX_ANSWER: &str =
    "No indexed content is available yet. Ingest a directory before querying.";

/// Per-call chunking overrides for `ingest`
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    pub chunk_size: Option<usize>,
    pub overlap: Option<usize>,
}

/// Facade over pipeline, store and providers
pub struct RagClient {
    store: RwLock<VectorStore>,
    embedder: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn GenerationProvider>,
    history: Mutex<Vec<Exchange>>,
    config: Config,
}

impl RagClient {
    /// Create a client, loading any existing snapshot.
    ///
    /// # Errors
    ///
    /// [`RagError::CorruptStore`] if a snapshot exists but cannot be
    /// trusted.
    pub fn new(
        config: Config,
        embedder: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn GenerationProvider>,
    ) -> Result<Self> {
        let store = VectorStore::open(config.storage.snapshot_path.clone())?;

        tracing::info!(
            "Client ready: {} records, embedding={}, generation={}",
            store.len(),
            embedder.name(),
            generator.name()
        );

        Ok(Self {
            store: RwLock::new(store),
            embedder,
            generator,
            history: Mutex::new(Vec::new()),
            config,
        })
    }

    /// Ingest a directory into the store and persist a snapshot.
    pub async fn ingest(&self, root: &Path, options: IngestOptions) -> Result<IngestSummary> {
        let chunk_size = options
            .chunk_size
            .unwrap_or(self.config.ingestion.chunk_size);
        let overlap = options.overlap.unwrap_or(self.config.ingestion.overlap);

        let scanner = Scanner::new(
            self.config.ingestion.allowed_extensions.clone(),
            self.config.ingestion.denied_dirs.clone(),
            self.config.ingestion.max_file_size_mb,
        );

        let pipeline = IngestPipeline::new(
            chunk_size,
            overlap,
            scanner,
            self.config.limits.fail_fast_threshold,
            self.provider_timeout(),
        )?;

        let (records, summary) = pipeline.run(root, self.embedder.as_ref()).await?;

        // Single write guard across append + save
        {
            let mut store = self.store.write().unwrap_or_else(|e| e.into_inner());
            store.append(records)?;
            store.save()?;
        }

        Ok(summary)
    }

    /// Answer a question grounded in the indexed corpus.
    ///
    /// Embeds the question, retrieves the `top_k` most similar
    /// chunks, and asks the generation provider for an answer with
    /// the retrieved text as context.
    pub async fn query(&self, question: &str, top_k: Option<usize>) -> Result<QueryOutput> {
        let k = top_k
            .unwrap_or(self.config.search.default_top_k)
            .min(self.config.search.max_top_k);

        {
            let store = self.store.read().unwrap_or_else(|e| e.into_inner());
            if store.is_empty() {
                tracing::debug!("Query against empty store, skipping generation");
                return Ok(QueryOutput {
                    answer: NO_INDEX_ANSWER.to_string(),
                    sources: Vec::new(),
                    history: self.record_exchange(question, NO_INDEX_ANSWER),
                });
            }
        }

        let query_vector = self.with_timeout(self.embedder.embed(question)).await?;

        // Read guard only while scoring; context is built from owned
        // copies so the lock is not held across the generation call
        let (sources, context) = {
            let store = self.store.read().unwrap_or_else(|e| e.into_inner());
            let hits = store.search(&query_vector, k)?;

            let sources: Vec<SourceRef> = hits
                .iter()
                .map(|(record, score)| SourceRef {
                    source: record.chunk.source.display().to_string(),
                    score: *score,
                    sequence_index: record.chunk.sequence_index,
                })
                .collect();

            let context = hits
                .iter()
                .map(|(record, _)| {
                    format!(
                        "[source: {} chunk {}]\n{}",
                        record.chunk.source.display(),
                        record.chunk.sequence_index,
                        record.chunk.text
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n");

            (sources, context)
        };

        let answer = self
            .with_timeout(self.generator.generate(question, &context))
            .await?;

        let history = self.record_exchange(question, &answer);

        Ok(QueryOutput {
            answer,
            sources,
            history,
        })
    }

    /// Read-only store statistics.
    pub fn stats(&self) -> StoreStats {
        self.store
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .stats()
    }

    /// Current conversation history.
    pub fn history(&self) -> Vec<Exchange> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Clear the conversation history. The store is unaffected.
    pub fn clear_history(&self) {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        tracing::debug!("Conversation history cleared");
    }

    fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.config.limits.provider_timeout_sec)
    }

    /// Run a provider future under the configured timeout.
    async fn with_timeout<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.provider_timeout(), fut).await {
            Ok(result) => result,
            Err(_) => Err(RagError::ProviderTimeout(
                self.config.limits.provider_timeout_sec,
            )),
        }
    }

    fn record_exchange(&self, question: &str, answer: &str) -> Vec<Exchange> {
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        history.push(Exchange {
            question: question.to_string(),
            answer: answer.to_string(),
        });
        history.clone()
    }
}
