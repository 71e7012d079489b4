//! Configuration management for the ragstore retrieval engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{RagError, Result};
use crate::core::ingest::{DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_DENIED_DIRS};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingestion: IngestionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Ingestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestionConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// File extensions to index (without leading dot)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Directory names pruned from traversal
    #[serde(default = "default_denied_dirs")]
    pub denied_dirs: Vec<String>,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Snapshot file for the vector store
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of chunks retrieved per query
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,

    /// Maximum chunks retrieved per query
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Per-call provider timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub provider_timeout_sec: u64,

    /// Consecutive embedding failures before ingestion fails fast
    #[serde(default = "default_fail_fast_threshold")]
    pub fail_fast_threshold: u32,
}

/// Provider selection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Embedding provider name
    #[serde(default = "default_embedding_provider")]
    pub embedding: String,

    /// Generation provider name
    #[serde(default = "default_generation_provider")]
    pub generation: String,
}

// Default value functions
fn default_chunk_size() -> usize {
    1000
}

fn default_overlap() -> usize {
    100
}

fn default_max_file_size() -> usize {
    10
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("./data/vectors.json")
}

fn default_top_k() -> usize {
    5
}

fn default_max_top_k() -> usize {
    50
}

fn default_provider_timeout() -> u64 {
    30
}

fn default_fail_fast_threshold() -> u32 {
    3
}

fn default_embedding_provider() -> String {
    "hash".to_string()
}

fn default_generation_provider() -> String {
    "extractive".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_denied_dirs() -> Vec<String> {
    DEFAULT_DENIED_DIRS.iter().map(|s| s.to_string()).collect()
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            max_file_size_mb: default_max_file_size(),
            allowed_extensions: default_allowed_extensions(),
            denied_dirs: default_denied_dirs(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            max_top_k: default_max_top_k(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            provider_timeout_sec: default_provider_timeout(),
            fail_fast_threshold: default_fail_fast_threshold(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            embedding: default_embedding_provider(),
            generation: default_generation_provider(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RagError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file
    /// locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. RAGSTORE_CONFIG env var
    /// 2. XDG config file (~/.config/ragstore/config.toml)
    /// 3. Legacy ./ragstore.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("RAGSTORE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("ragstore.toml").exists() {
                Self::from_file("ragstore.toml")?
            } else {
                Self::default()
            }
        };

        // Store the snapshot in the XDG data directory unless the
        // path was set explicitly
        if env::var("RAGSTORE_SNAPSHOT_PATH").is_err()
            && config.storage.snapshot_path == default_snapshot_path()
        {
            config.storage.snapshot_path = xdg.snapshot_file();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("RAGSTORE_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.ingestion.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("RAGSTORE_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.ingestion.overlap = o;
            }
        }
        if let Ok(max_size) = env::var("RAGSTORE_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.ingestion.max_file_size_mb = size;
            }
        }

        if let Ok(path) = env::var("RAGSTORE_SNAPSHOT_PATH") {
            self.storage.snapshot_path = PathBuf::from(path);
        }

        if let Ok(top_k) = env::var("RAGSTORE_DEFAULT_TOP_K") {
            if let Ok(k) = top_k.parse() {
                self.search.default_top_k = k;
            }
        }
        if let Ok(max_k) = env::var("RAGSTORE_MAX_TOP_K") {
            if let Ok(k) = max_k.parse() {
                self.search.max_top_k = k;
            }
        }

        if let Ok(timeout) = env::var("RAGSTORE_PROVIDER_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.limits.provider_timeout_sec = t;
            }
        }
        if let Ok(threshold) = env::var("RAGSTORE_FAIL_FAST_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.limits.fail_fast_threshold = t;
            }
        }

        if let Ok(name) = env::var("RAGSTORE_EMBEDDING_PROVIDER") {
            self.provider.embedding = name;
        }
        if let Ok(name) = env::var("RAGSTORE_GENERATION_PROVIDER") {
            self.provider.generation = name;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ingestion.chunk_size == 0 {
            return Err(RagError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.ingestion.overlap >= self.ingestion.chunk_size {
            return Err(RagError::ConfigError(
                "Overlap must be less than chunk size".to_string(),
            ));
        }

        if self.search.default_top_k == 0 {
            return Err(RagError::ConfigError(
                "Default top_k must be non-zero".to_string(),
            ));
        }

        if self.search.default_top_k > self.search.max_top_k {
            return Err(RagError::ConfigError(
                "Default top_k cannot exceed max top_k".to_string(),
            ));
        }

        if self.limits.provider_timeout_sec == 0 {
            return Err(RagError::ConfigError(
                "Provider timeout must be non-zero".to_string(),
            ));
        }

        if self.limits.fail_fast_threshold == 0 {
            return Err(RagError::ConfigError(
                "Fail-fast threshold must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting nothing; no secrets live here)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.ingestion.chunk_size);
        tracing::info!("  Overlap: {} chars", self.ingestion.overlap);
        tracing::info!("  Max file size: {} MB", self.ingestion.max_file_size_mb);
        tracing::info!(
            "  Allowed extensions: {}",
            self.ingestion.allowed_extensions.len()
        );
        tracing::info!("  Denied dirs: {}", self.ingestion.denied_dirs.len());
        tracing::info!("  Snapshot: {:?}", self.storage.snapshot_path);
        tracing::info!("  Default top_k: {}", self.search.default_top_k);
        tracing::info!("  Max top_k: {}", self.search.max_top_k);
        tracing::info!(
            "  Provider timeout: {}s",
            self.limits.provider_timeout_sec
        );
        tracing::info!(
            "  Fail-fast threshold: {}",
            self.limits.fail_fast_threshold
        );
        tracing::info!("  Embedding provider: {}", self.provider.embedding);
        tracing::info!("  Generation provider: {}", self.provider.generation);
    }
}
