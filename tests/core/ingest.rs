// Integration tests for the ingestion pipeline

use crate::common::{assert_valid_summary, create_test_client, TestRepo};
use ragstore::core::client::IngestOptions;
use ragstore::core::ingest::{IngestPipeline, Scanner};
use ragstore::core::provider::HashEmbedder;
use std::time::Duration;

#[tokio::test]
async fn test_ingest_small_repository() {
    let repo = TestRepo::small();
    let (client, _store_dir) = create_test_client();

    let summary = client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    assert_valid_summary(&summary);
    assert_eq!(summary.files_scanned, 10);
    assert_eq!(summary.files_skipped, 0);
}

#[tokio::test]
async fn test_ingest_medium_repository() {
    let repo = TestRepo::medium();
    let (client, _store_dir) = create_test_client();

    let summary = client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    assert_valid_summary(&summary);
    assert_eq!(summary.files_scanned, 50);
    assert!(summary.chunks_processed >= 50); // At least one chunk per file
}

#[tokio::test]
async fn test_ingest_skips_denied_directories() {
    let repo = TestRepo::with_files(&[
        ("src/main.py", "print('indexed')"),
        (".git/config", "[core]\nbare = false"),
        ("node_modules/pkg/index.js", "module.exports = {}"),
        ("__pycache__/main.py", "stale bytecode source"),
    ]);
    let (client, _store_dir) = create_test_client();

    let summary = client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    assert_eq!(summary.files_scanned, 1);
}

#[tokio::test]
async fn test_ingest_skips_unknown_extensions() {
    let repo = TestRepo::with_files(&[
        ("code.py", "x = 1"),
        ("image.png", "not really a png"),
        ("binary.exe", "not really an exe"),
    ]);
    let (client, _store_dir) = create_test_client();

    let summary = client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_skipped, 0);
}

#[tokio::test]
async fn test_ingest_chunk_overrides() {
    // 250 chars at chunk_size=100, overlap=20 gives 4 chunks
    let content = "x".repeat(250);
    let repo = TestRepo::with_files(&[("long.txt", &content)]);
    let (client, _store_dir) = create_test_client();

    let summary = client
        .ingest(
            repo.path(),
            IngestOptions {
                chunk_size: Some(100),
                overlap: Some(20),
            },
        )
        .await
        .unwrap();

    assert_eq!(summary.chunks_processed, 4);
}

#[tokio::test]
async fn test_pipeline_multibyte_content_is_safe() {
    let repo = TestRepo::with_files(&[
        ("cjk.md", "中文测试中文测试中文测试中文测试中文测试"),
        ("emoji.md", "Rust 🦀 is 🚀 awesome ✅ truly 🎉 yes 👋"),
        ("mixed.py", "# Документация\ndef greet():\n    return 'שלום עולם'"),
    ]);

    let pipeline = IngestPipeline::new(
        7, // Small chunks force splits inside multibyte runs
        3,
        Scanner::with_defaults(10),
        3,
        Duration::from_secs(5),
    )
    .unwrap();

    let (records, summary) = pipeline
        .run(repo.path(), &HashEmbedder::new())
        .await
        .unwrap();

    assert_eq!(summary.files_scanned, 3);
    assert!(!records.is_empty());

    // Every chunk must be valid UTF-8 with honest byte offsets
    for record in &records {
        assert_eq!(
            record.chunk.end_offset - record.chunk.start_offset,
            record.chunk.text.len()
        );
    }
}

#[tokio::test]
async fn test_pipeline_chunks_reassemble_sources() {
    let content = "abcdefghijklmnopqrstuvwxyz0123456789";
    let repo = TestRepo::with_files(&[("letters.txt", content)]);

    let pipeline = IngestPipeline::new(
        10,
        4,
        Scanner::with_defaults(10),
        3,
        Duration::from_secs(5),
    )
    .unwrap();

    let (records, _) = pipeline
        .run(repo.path(), &HashEmbedder::new())
        .await
        .unwrap();

    // Strip each chunk's overlap with its predecessor and rebuild
    let mut rebuilt = String::new();
    let mut covered: usize = 0;
    for record in &records {
        let skip = covered.saturating_sub(record.chunk.start_offset);
        rebuilt.push_str(&record.chunk.text[skip..]);
        covered = record.chunk.end_offset;
    }

    assert_eq!(rebuilt, content);
}
