//! In-memory vector store with durable JSON snapshots.
//!
//! Owns the ordered collection of `(chunk, embedding)` records for
//! one corpus. Similarity search is an exhaustive linear cosine
//! scan, O(n·d) per query, which is the intended semantics at the
//! target scale (tens of thousands of vectors); results are exact,
//! never approximate.
//!
//! Persistence is a full snapshot per save: the file is written to a
//! temporary path in the same directory, fsynced, then atomically
//! renamed over the target, so a reader never observes a partial
//! write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::error::{RagError, Result};
use crate::core::types::{Record, StoreStats};

/// Snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk snapshot layout.
///
/// The header fields allow fast validation on load before trusting
/// the record array.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    dimension: Option<usize>,
    record_count: usize,
    saved_at: DateTime<Utc>,
    records: Vec<Record>,
}

/// In-memory vector collection bound to a snapshot file.
#[derive(Debug)]
pub struct VectorStore {
    path: PathBuf,
    dimension: Option<usize>,
    records: Vec<Record>,
}

impl VectorStore {
    /// Create an empty store bound to a snapshot path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            dimension: None,
            records: Vec::new(),
        }
    }

    /// Open a store, loading the snapshot if one exists.
    ///
    /// A missing file yields an empty store; a present but
    /// unreadable file is a fatal [`RagError::CorruptStore`].
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Established embedding dimension, `None` until first append.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Append records, all-or-nothing.
    ///
    /// The first inserted record establishes the store's dimension;
    /// every subsequent embedding must match it. On mismatch the
    /// whole batch is rejected and the store is unchanged.
    pub fn append(&mut self, records: Vec<Record>) -> Result<usize> {
        let mut expected = self.dimension;
        for record in &records {
            match expected {
                None => expected = Some(record.embedding.len()),
                Some(dim) => {
                    if record.embedding.len() != dim {
                        return Err(RagError::DimensionMismatch {
                            expected: dim,
                            actual: record.embedding.len(),
                        });
                    }
                }
            }
        }

        let added = records.len();
        self.dimension = expected;
        self.records.extend(records);
        Ok(added)
    }

    /// Exhaustive cosine similarity search.
    ///
    /// Scores are `dot(a,b) / (‖a‖·‖b‖)`; a zero-norm vector on
    /// either side scores 0.0 instead of raising. Results are sorted
    /// by descending score with ties kept in insertion order (stable
    /// sort). `top_k` larger than the store returns everything;
    /// `top_k == 0` or an empty store returns an empty vec.
    ///
    /// # Errors
    ///
    /// [`RagError::DimensionMismatch`] if the query vector's length
    /// differs from the store's established dimension.
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<(&Record, f32)>> {
        if self.records.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        if let Some(dim) = self.dimension {
            if query.len() != dim {
                return Err(RagError::DimensionMismatch {
                    expected: dim,
                    actual: query.len(),
                });
            }
        }

        let mut scored: Vec<(&Record, f32)> = self
            .records
            .iter()
            .map(|record| (record, cosine_similarity(query, &record.embedding)))
            .collect();

        // Stable sort keeps insertion order on equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        Ok(scored)
    }

    /// Persist the full collection atomically.
    ///
    /// Write-temp, fsync, rename: an interrupted save leaves the
    /// previous snapshot intact.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            dimension: self.dimension,
            record_count: self.records.len(),
            saved_at: Utc::now(),
            records: self.records.clone(),
        };

        let json = serde_json::to_vec(&snapshot)?;

        // Temp file in the same directory so the rename is atomic
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            "Saved snapshot: {} records to {:?}",
            snapshot.record_count,
            self.path
        );

        Ok(())
    }

    /// Reload the collection from the snapshot file.
    ///
    /// Missing file: empty store. Unparsable file or header/record
    /// disagreement: [`RagError::CorruptStore`] with no partial
    /// recovery, since ranking correctness depends on the true
    /// record set.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            self.records = Vec::new();
            self.dimension = None;
            return Ok(());
        }

        let contents = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|e| RagError::CorruptStore {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RagError::CorruptStore {
                path: self.path.clone(),
                message: format!(
                    "unsupported snapshot version {} (current: {})",
                    snapshot.version, SNAPSHOT_VERSION
                ),
            });
        }

        if snapshot.record_count != snapshot.records.len() {
            return Err(RagError::CorruptStore {
                path: self.path.clone(),
                message: format!(
                    "header claims {} records, file holds {}",
                    snapshot.record_count,
                    snapshot.records.len()
                ),
            });
        }

        match snapshot.dimension {
            Some(dim) => {
                if let Some(bad) = snapshot.records.iter().find(|r| r.embedding.len() != dim) {
                    return Err(RagError::CorruptStore {
                        path: self.path.clone(),
                        message: format!(
                            "record for {:?} has dimension {} but header says {}",
                            bad.chunk.source,
                            bad.embedding.len(),
                            dim
                        ),
                    });
                }
            }
            // A null dimension with records present would disable the
            // query-dimension check on search
            None => {
                if !snapshot.records.is_empty() {
                    return Err(RagError::CorruptStore {
                        path: self.path.clone(),
                        message: format!(
                            "header has no dimension but file holds {} records",
                            snapshot.records.len()
                        ),
                    });
                }
            }
        }

        self.dimension = snapshot.dimension;
        self.records = snapshot.records;

        tracing::debug!("Loaded {} records from {:?}", self.records.len(), self.path);

        Ok(())
    }

    /// Read-only store statistics.
    pub fn stats(&self) -> StoreStats {
        let unique_sources: HashSet<&Path> = self
            .records
            .iter()
            .map(|r| r.chunk.source.as_path())
            .collect();

        StoreStats {
            total_chunks: self.records.len(),
            embedding_dimension: self.dimension,
            unique_sources: unique_sources.len(),
        }
    }
}

/// Cosine similarity with the zero-norm convention.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
