//! Ingestion: directory scanning, chunking and the pipeline that
//! feeds embedded records into the vector store.

pub mod chunker;
pub mod pipeline;
pub mod scanner;

pub use chunker::Chunker;
pub use pipeline::IngestPipeline;
pub use scanner::{Scanner, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_DENIED_DIRS};
