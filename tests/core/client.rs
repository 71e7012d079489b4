// Integration tests for the client facade

use crate::common::{create_test_client, test_config, TestRepo};
use ragstore::core::client::{IngestOptions, NO_INDEX_ANSWER};
use ragstore::core::types::QueryOutput;

fn assert_sources_descending(output: &QueryOutput) {
    for pair in output.sources.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "sources not sorted: {} < {}",
            pair[0].score,
            pair[1].score
        );
    }
}

#[tokio::test]
async fn test_query_before_any_ingest() {
    let (client, _store_dir) = create_test_client();

    let output = client.query("what is in here?", None).await.unwrap();

    assert_eq!(output.answer, NO_INDEX_ANSWER);
    assert!(output.sources.is_empty());
    // The exchange is still recorded
    assert_eq!(output.history.len(), 1);
    assert_eq!(output.history[0].question, "what is in here?");
}

#[tokio::test]
async fn test_query_retrieves_relevant_source() {
    let repo = TestRepo::with_files(&[
        (
            "auth.py",
            "def authenticate(username, password):\n    return verify_credentials(username, password)\n",
        ),
        (
            "billing.py",
            "def calculate_invoice(items):\n    return sum(item.price for item in items)\n",
        ),
    ]);
    let (client, _store_dir) = create_test_client();
    client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    let output = client
        .query("authenticate username password", Some(1))
        .await
        .unwrap();

    assert_eq!(output.sources.len(), 1);
    assert!(output.sources[0].source.ends_with("auth.py"));
    assert!(!output.answer.is_empty());
    assert_ne!(output.answer, NO_INDEX_ANSWER);
}

#[tokio::test]
async fn test_query_top_k_and_ordering() {
    let repo = TestRepo::small();
    let (client, _store_dir) = create_test_client();
    client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    let output = client.query("helper function", Some(3)).await.unwrap();

    assert!(output.sources.len() <= 3);
    assert!(!output.sources.is_empty());
    assert_sources_descending(&output);
}

#[tokio::test]
async fn test_query_top_k_clamped_to_configured_max() {
    let store_dir = tempfile::TempDir::new().unwrap();
    let mut config = test_config(&store_dir);
    config.search.max_top_k = 2;

    let repo = TestRepo::small();
    let client = crate::common::helpers::create_test_client_with_config(config);
    client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    let output = client.query("anything at all", Some(1000)).await.unwrap();
    assert!(output.sources.len() <= 2);
}

#[tokio::test]
async fn test_history_accumulates_across_queries() {
    let repo = TestRepo::small();
    let (client, _store_dir) = create_test_client();
    client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    client.query("first question", None).await.unwrap();
    let output = client.query("second question", None).await.unwrap();

    assert_eq!(output.history.len(), 2);
    assert_eq!(output.history[0].question, "first question");
    assert_eq!(output.history[1].question, "second question");

    client.clear_history();
    assert!(client.history().is_empty());

    // Clearing history never touches the index
    assert!(client.stats().total_chunks > 0);
}

#[tokio::test]
async fn test_stats_reflect_ingested_content() {
    let repo = TestRepo::with_files(&[
        ("a.py", "content of file a, long enough to matter"),
        ("b.py", "content of file b, also long enough"),
    ]);
    let (client, _store_dir) = create_test_client();

    let before = client.stats();
    assert_eq!(before.total_chunks, 0);
    assert_eq!(before.embedding_dimension, None);

    client
        .ingest(repo.path(), IngestOptions::default())
        .await
        .unwrap();

    let after = client.stats();
    assert_eq!(after.total_chunks, 2);
    assert_eq!(after.unique_sources, 2);
    assert_eq!(after.embedding_dimension, Some(384));
}

#[tokio::test]
async fn test_second_ingest_is_visible_to_queries() {
    let first = TestRepo::with_files(&[("alpha.py", "the alpha module handles startup")]);
    let second = TestRepo::with_files(&[("omega.py", "the omega module handles shutdown")]);
    let (client, _store_dir) = create_test_client();

    client
        .ingest(first.path(), IngestOptions::default())
        .await
        .unwrap();
    client
        .ingest(second.path(), IngestOptions::default())
        .await
        .unwrap();

    let output = client
        .query("omega module shutdown", Some(1))
        .await
        .unwrap();
    assert!(output.sources[0].source.ends_with("omega.py"));
    assert_eq!(client.stats().unique_sources, 2);
}
