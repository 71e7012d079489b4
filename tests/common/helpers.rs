// Test helper functions

use ragstore::core::client::RagClient;
use ragstore::core::config::Config;
use ragstore::core::provider::{ExtractiveGenerator, HashEmbedder};
use ragstore::core::types::IngestSummary;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a config whose snapshot lives under the given temp dir
#[allow(dead_code)] // Used in integration tests
pub fn test_config(temp: &TempDir) -> Config {
    let mut config = Config::default();
    config.storage.snapshot_path = temp.path().join("vectors.json");
    config
}

/// Create a test client with the offline providers and temp storage.
///
/// The returned `TempDir` guard keeps the snapshot directory alive;
/// hold it for the duration of the test.
#[allow(dead_code)] // Used in integration tests
pub fn create_test_client() -> (RagClient, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let client = create_test_client_with_config(test_config(&temp));
    (client, temp)
}

/// Create a test client over an explicit config
#[allow(dead_code)] // Used in integration tests
pub fn create_test_client_with_config(config: Config) -> RagClient {
    RagClient::new(
        config,
        Arc::new(HashEmbedder::new()),
        Arc::new(ExtractiveGenerator::new()),
    )
    .expect("Failed to create client")
}

/// Assert that an ingestion summary is valid
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_summary(summary: &IngestSummary) {
    assert!(
        summary.files_scanned > 0,
        "Expected files_scanned > 0, got {}",
        summary.files_scanned
    );
    assert!(
        summary.chunks_processed > 0,
        "Expected chunks_processed > 0, got {}",
        summary.chunks_processed
    );
    assert!(
        summary.chunks_processed >= summary.files_scanned,
        "Expected chunks_processed ({}) >= files_scanned ({})",
        summary.chunks_processed,
        summary.files_scanned
    );
}
