//! Directory scanner with extension and directory filtering.
//!
//! Walks a directory tree in deterministic lexical order, keeping
//! regular files whose extension is on an allow-list and pruning
//! denied directories (VCS metadata, dependency caches, build
//! output). Symlinks are never followed. Unreadable or binary files
//! are skipped by the caller, never fatal.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{RagError, Result};

/// Extensions treated as indexable text
pub static DEFAULT_ALLOWED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "py", "rs", "js", "ts", "tsx", "jsx", "go", "java", "c", "cpp", "h", "hpp", "rb", "php",
        "sh", "md", "txt", "toml", "yaml", "yml", "json", "cfg", "ini", "sql", "html", "css",
    ]
});

/// Directory names pruned from traversal
pub static DEFAULT_DENIED_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".git",
        "__pycache__",
        "node_modules",
        "target",
        "venv",
        ".venv",
        "env",
        "dist",
        "build",
        "vendor",
        ".idea",
        ".vscode",
        ".pytest_cache",
        ".mypy_cache",
    ]
});

/// Directory scanner producing indexable file paths
#[derive(Debug)]
pub struct Scanner {
    allowed_extensions: HashSet<String>,
    denied_dirs: HashSet<String>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl Scanner {
    /// Create a scanner with explicit filter lists.
    ///
    /// Extensions are matched without the leading dot and
    /// case-insensitively.
    pub fn new(
        allowed_extensions: Vec<String>,
        denied_dirs: Vec<String>,
        max_file_size_mb: usize,
    ) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            denied_dirs: denied_dirs.into_iter().collect(),
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        }
    }

    /// Create a scanner with the default filter lists.
    pub fn with_defaults(max_file_size_mb: usize) -> Self {
        Self::new(
            DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            DEFAULT_DENIED_DIRS.iter().map(|s| s.to_string()).collect(),
            max_file_size_mb,
        )
    }

    /// Collect all indexable files under a root directory.
    ///
    /// Traversal order is lexical by file name, so re-running the
    /// scan over an unchanged tree yields the same sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::InvalidPath`] if the root is missing or
    /// not a directory.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(RagError::InvalidPath(format!(
                "{} does not exist",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(RagError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_descend(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::debug!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if self.has_allowed_extension(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        Ok(files)
    }

    /// Read a file as UTF-8 text.
    ///
    /// Callers treat failures (binary content, permission errors) as
    /// skippable, counting them in the ingestion summary.
    pub fn read_text(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }

    /// Determine whether to descend into a directory entry.
    ///
    /// The root itself is never filtered. Hidden directories and
    /// denied names prune the entire subtree early.
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if !entry.file_type().is_dir() {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                return false;
            }
            if self.denied_dirs.contains(name) {
                tracing::debug!("Skipping denied directory: {:?}", path);
                return false;
            }
        }

        true
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.allowed_extensions.contains(&e.to_ascii_lowercase()))
            .unwrap_or(false)
    }
}
