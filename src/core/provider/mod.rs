//! Provider capability interfaces and the static provider registry.
//!
//! The retrieval engine consumes two capabilities: turning text into
//! a fixed-dimension embedding vector, and turning a prompt plus
//! retrieved context into a generated answer. API-backed providers
//! live in outer layers and plug in through these traits; the crate
//! ships deterministic offline implementations so the CLI and tests
//! work without a network.

pub mod extractive;
pub mod hash;

pub use extractive::ExtractiveGenerator;
pub use hash::HashEmbedder;

use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::error::{RagError, Result};

/// Capability: embed text into a fixed-dimension vector.
///
/// The dimension must be uniform across all calls on one instance;
/// the vector store enforces this on append.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Provider name for logs and stats
    fn name(&self) -> &str;

    /// Embed a single text.
    ///
    /// Fails with [`RagError::Embedding`] on provider fault.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Capability: generate an answer from a question and retrieved context.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Provider name for logs and stats
    fn name(&self) -> &str;

    /// Generate an answer.
    ///
    /// Fails with [`RagError::Generation`] on provider fault.
    async fn generate(&self, question: &str, context: &str) -> Result<String>;
}

/// Built-in embedding providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingKind {
    /// Deterministic token-hashing embedder (offline)
    Hash,
}

impl FromStr for EmbeddingKind {
    type Err = RagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hash" => Ok(Self::Hash),
            other => Err(RagError::ConfigError(format!(
                "Unknown embedding provider '{other}' (built-in: hash)"
            ))),
        }
    }
}

/// Built-in generation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    /// Extractive answering straight from retrieved context (offline)
    Extractive,
}

impl FromStr for GenerationKind {
    type Err = RagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "extractive" => Ok(Self::Extractive),
            other => Err(RagError::ConfigError(format!(
                "Unknown generation provider '{other}' (built-in: extractive)"
            ))),
        }
    }
}

/// Resolve an embedding provider at startup.
///
/// Static mapping, no runtime registry mutation.
pub fn embedding_provider(kind: EmbeddingKind) -> Arc<dyn EmbeddingProvider> {
    match kind {
        EmbeddingKind::Hash => Arc::new(HashEmbedder::new()),
    }
}

/// Resolve a generation provider at startup.
pub fn generation_provider(kind: GenerationKind) -> Arc<dyn GenerationProvider> {
    match kind {
        GenerationKind::Extractive => Arc::new(ExtractiveGenerator::new()),
    }
}
