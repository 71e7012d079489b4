//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (CLI, HTTP, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **ingest**: Directory scanning and chunking pipeline
//! - **provider**: Embedding and generation capabilities
//! - **store**: In-memory vector store with JSON snapshots
//! - **client**: Facade wiring the pieces together

pub mod client;
pub mod config;
pub mod error;
pub mod ingest;
pub mod provider;
pub mod store;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use client::{IngestOptions, RagClient};
pub use config::Config;
pub use error::{RagError, Result};
pub use store::VectorStore;
