//! Error types and error handling for the ragstore retrieval engine.
//!
//! This module defines the error taxonomy used throughout the
//! application. Caller/config faults surface immediately, provider
//! faults are transient and may be skipped or retried by callers,
//! and data-integrity faults are always fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ragstore operations
pub type Result<T> = std::result::Result<T, RagError>;

/// Main error type for the retrieval engine
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid chunk config: {0}")]
    InvalidChunkConfig(String),

    #[error("Embedding provider error: {0}")]
    Embedding(String),

    #[error("Generation provider error: {0}")]
    Generation(String),

    #[error("Provider unavailable after {failures} consecutive failures: {message}")]
    ProviderUnavailable { failures: u32, message: String },

    #[error("Provider call timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Embedding dimension mismatch: store has {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Corrupt store snapshot at {path:?}: {message}")]
    CorruptStore { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RagError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, RagError::InvalidPath(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RagError::InvalidChunkConfig(_) | RagError::ConfigError(_)
        )
    }

    /// Check if this is a transient provider fault.
    ///
    /// Transient faults may be skipped per-item during ingestion;
    /// they never indicate corrupted local state.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RagError::Embedding(_)
                | RagError::Generation(_)
                | RagError::ProviderUnavailable { .. }
                | RagError::ProviderTimeout(_)
        )
    }

    /// Check if this is a fatal data-integrity error.
    ///
    /// Integrity errors are never auto-repaired: silently dropping
    /// or truncating vectors would corrupt ranking correctness.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            RagError::DimensionMismatch { .. } | RagError::CorruptStore { .. }
        )
    }
}
