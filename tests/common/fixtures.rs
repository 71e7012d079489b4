// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository fixture for creating synthetic test data
#[allow(dead_code)] // Used in integration tests
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// Create a small test repository (10 files)
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_files(&[
            ("src/main.rs", "fn main() { println!(\"Hello\"); }"),
            ("src/lib.rs", "pub fn helper() -> u32 { 42 }"),
            (
                "src/utils.rs",
                "pub fn add(a: i32, b: i32) -> i32 { a + b }",
            ),
            ("README.md", "# Test Project\n\nThis is a test."),
            (
                "src/auth.rs",
                "pub fn authenticate(user: &str) -> bool { !user.is_empty() }",
            ),
            (
                "src/db.rs",
                "pub fn connect() -> Result<(), String> { Ok(()) }",
            ),
            ("docs/api.md", "# API\n\n## Functions\n\n- `helper()`\n"),
            ("scripts/build.sh", "#!/bin/sh\ncargo build --release\n"),
            ("config.yaml", "name: test\nversion: 0.1.0\n"),
            ("notes.txt", "Remember to update the changelog.\n"),
        ])
    }

    /// Create a medium test repository (50 files)
    #[allow(dead_code)] // Used in integration tests
    pub fn medium() -> Self {
        let files: Vec<(String, String)> = (0..50)
            .map(|i| {
                (
                    format!("src/module_{i}.py"),
                    format!("# Module {i}\ndef func_{i}():\n    return {i}\n"),
                )
            })
            .collect();

        Self::with_files(
            files
                .iter()
                .map(|(f, c)| (f.as_str(), c.as_str()))
                .collect::<Vec<_>>()
                .as_slice(),
        )
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the repository
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
