//! Ragstore - Local RAG Engine for Code and Docs
//!
//! A retrieval-augmented generation engine over local files:
//! directory scanning, overlapping chunking, embedding, and
//! cosine-similarity search over an in-memory vector store with
//! crash-safe JSON snapshots.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - ingest (directory scanning, chunking, pipeline)
//!   - provider (embedding and generation traits + built-ins)
//!   - store (vector store, snapshot persistence)
//!   - client (facade: ingest, query, stats, history)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - ingest, query, stats, completions
//!
//! # Key Features
//!
//! - UTF-8 safe chunking (character-based, never panics)
//! - Exhaustive cosine-similarity search (exact, no ANN index)
//! - Atomic snapshot writes (temp file + fsync + rename)
//! - Pluggable providers behind async traits
//! - Offline by default (hash embedder, extractive generator)

// Core domain logic (protocol-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::client::{IngestOptions, RagClient, NO_INDEX_ANSWER};
pub use core::config::Config;
pub use core::error::{RagError, Result};
pub use core::store::VectorStore;
pub use core::types::*;
