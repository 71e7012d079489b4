// Integration tests for vector store persistence

use ragstore::core::error::RagError;
use ragstore::core::store::VectorStore;
use ragstore::core::types::{Chunk, Record};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn record(text: &str, source: &str, seq: usize, embedding: Vec<f32>) -> Record {
    Record {
        chunk: Chunk {
            text: text.to_string(),
            source: PathBuf::from(source),
            start_offset: 0,
            end_offset: text.len().max(1),
            sequence_index: seq,
        },
        embedding,
    }
}

#[test]
fn test_snapshot_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vectors.json");

    let mut store = VectorStore::new(path.clone());
    store
        .append(vec![
            record("first chunk", "a.py", 0, vec![1.0, 0.0]),
            record("second chunk", "a.py", 1, vec![0.0, 1.0]),
            record("other file", "b.py", 0, vec![0.5, 0.5]),
        ])
        .unwrap();
    store.save().unwrap();
    drop(store);

    let reopened = VectorStore::open(path).unwrap();
    assert_eq!(reopened.len(), 3);
    assert_eq!(reopened.dimension(), Some(2));

    let stats = reopened.stats();
    assert_eq!(stats.total_chunks, 3);
    assert_eq!(stats.unique_sources, 2);

    // Search still works after the round trip
    let hits = reopened.search(&[1.0, 0.0], 1).unwrap();
    assert_eq!(hits[0].0.chunk.text, "first chunk");
}

#[test]
fn test_resave_overwrites_previous_snapshot() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vectors.json");

    let mut store = VectorStore::new(path.clone());
    store
        .append(vec![record("one", "a.py", 0, vec![1.0])])
        .unwrap();
    store.save().unwrap();

    store
        .append(vec![record("two", "a.py", 1, vec![2.0])])
        .unwrap();
    store.save().unwrap();

    let reopened = VectorStore::open(path).unwrap();
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_interrupted_save_leaves_old_snapshot_readable() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vectors.json");

    let mut store = VectorStore::new(path.clone());
    store
        .append(vec![record("durable", "a.py", 0, vec![1.0])])
        .unwrap();
    store.save().unwrap();

    // A crash mid-write would leave a stray temp file behind; the
    // real snapshot must still load untouched
    fs::write(path.with_extension("json.tmp"), "garbage{{{").unwrap();

    let reopened = VectorStore::open(path).unwrap();
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_truncated_snapshot_is_corrupt() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vectors.json");

    let mut store = VectorStore::new(path.clone());
    store
        .append(vec![record("payload", "a.py", 0, vec![1.0, 2.0, 3.0])])
        .unwrap();
    store.save().unwrap();

    // Chop the file in half
    let contents = fs::read_to_string(&path).unwrap();
    fs::write(&path, &contents[..contents.len() / 2]).unwrap();

    let err = VectorStore::open(path).unwrap_err();
    assert!(matches!(err, RagError::CorruptStore { .. }));
}

#[test]
fn test_snapshot_into_missing_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deep/nested/dir/vectors.json");

    let mut store = VectorStore::new(path.clone());
    store
        .append(vec![record("t", "a.py", 0, vec![1.0])])
        .unwrap();
    store.save().unwrap();

    assert!(path.exists());
}

#[test]
fn test_empty_store_snapshot_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vectors.json");

    let store = VectorStore::new(path.clone());
    store.save().unwrap();

    let reopened = VectorStore::open(path).unwrap();
    assert!(reopened.is_empty());
    assert_eq!(reopened.dimension(), None);
}
