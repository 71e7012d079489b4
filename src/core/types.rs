//! Core data types for the ragstore retrieval engine.
//!
//! This module defines the data structures shared across the
//! ingestion pipeline, the vector store and the client facade.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single text chunk cut from a source document.
///
/// Chunks from one source, ordered by `sequence_index`, reconstruct
/// the source file once overlaps are removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// The actual text content
    pub text: String,

    /// Originating file path (used for display and citation)
    pub source: PathBuf,

    /// Byte offset where the chunk starts in the original file
    pub start_offset: usize,

    /// Byte offset where the chunk ends in the original file
    pub end_offset: usize,

    /// Position among chunks from the same source
    pub sequence_index: usize,
}

/// A stored `(chunk, embedding)` pair.
///
/// Insertion order of records defines the on-disk snapshot layout
/// but never the retrieval order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub chunk: Chunk,
    pub embedding: Vec<f32>,
}

/// Aggregate statistics from one ingestion run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Files read and chunked successfully
    pub files_scanned: usize,

    /// Chunks embedded and turned into records
    pub chunks_processed: usize,

    /// Files skipped (unreadable, binary, oversized)
    pub files_skipped: usize,

    /// Chunks dropped because their embedding call failed
    pub chunks_skipped: usize,

    /// Ingestion duration in milliseconds
    pub duration_ms: u64,
}

/// Read-only introspection of the vector store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    /// Total stored records
    pub total_chunks: usize,

    /// Embedding dimension, `None` until the first append
    pub embedding_dimension: Option<usize>,

    /// Number of distinct source paths
    pub unique_sources: usize,
}

/// Citation metadata for one retrieved chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    /// Source file path of the matched chunk
    pub source: String,

    /// Cosine similarity against the query vector
    pub score: f32,

    /// Chunk position within its source file
    pub sequence_index: usize,
}

/// One question/answer exchange in the conversation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Response from a RAG query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutput {
    /// Generated answer (or the fixed no-content answer)
    pub answer: String,

    /// Retrieved chunks, descending by score
    pub sources: Vec<SourceRef>,

    /// Conversation history including this exchange
    pub history: Vec<Exchange>,
}
