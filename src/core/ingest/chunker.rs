//! UTF-8 safe overlapping text chunking.
//!
//! Splits text into fixed-size windows measured in **characters**,
//! not bytes, so chunk boundaries always fall on valid character
//! boundaries. Offsets recorded on each chunk are byte offsets into
//! the original text, usable for slicing and citation.

use crate::core::error::{RagError, Result};
use crate::core::types::Chunk;
use std::path::Path;

/// Overlapping fixed-window chunker.
///
/// Each chunk starts `chunk_size - overlap` characters after the
/// previous one, so adjacent chunks share exactly `overlap`
/// characters and every character is covered by at least one chunk.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Number of characters per chunk
    chunk_size: usize,

    /// Number of characters shared between consecutive chunks
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidChunkConfig`] if `chunk_size` is 0
    /// or `overlap >= chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagError::InvalidChunkConfig(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(RagError::InvalidChunkConfig(format!(
                "overlap ({overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap size in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Chunk text into overlapping windows.
    ///
    /// Empty input yields an empty sequence. The last chunk is
    /// clamped to the end of the text and may be shorter than
    /// `chunk_size`, but is never empty.
    pub fn chunk_text(&self, text: &str, source: &Path) -> Vec<Chunk> {
        // Work on (byte offset, char) pairs so slices never split a
        // multi-byte character
        let char_indices: Vec<(usize, char)> = text.char_indices().collect();

        if char_indices.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut char_start_idx = 0;
        let step = self.chunk_size - self.overlap;

        while char_start_idx < char_indices.len() {
            let char_end_idx = (char_start_idx + self.chunk_size).min(char_indices.len());

            let byte_start = char_indices[char_start_idx].0;
            let byte_end = if char_end_idx < char_indices.len() {
                char_indices[char_end_idx].0
            } else {
                text.len()
            };

            chunks.push(Chunk {
                text: text[byte_start..byte_end].to_string(),
                source: source.to_path_buf(),
                start_offset: byte_start,
                end_offset: byte_end,
                sequence_index: chunks.len(),
            });

            // step >= 1 is guaranteed by the constructor
            char_start_idx += step;
        }

        chunks
    }
}
