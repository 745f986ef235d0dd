// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories with gold-standard files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write a file under the fixture root, creating parent directories
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write gold sentences as a flat JSON list
    pub fn create_gold_list<P: AsRef<Path>>(&self, relative_path: P, sentences: &[&str]) -> PathBuf {
        let json = serde_json::to_string_pretty(sentences).expect("Failed to serialize gold list");
        self.create_file(relative_path, &json)
    }

    /// Write a single-document gold file with embedded text
    pub fn create_gold_document<P: AsRef<Path>>(&self, relative_path: P, text: &str, sentences: &[&str]) -> PathBuf {
        let json = serde_json::json!({ "text": text, "sentences": sentences });
        self.create_file(relative_path, &json.to_string())
    }
}

/// Assert two floats agree to the four decimals metrics are reported with
pub fn assert_metric(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{label}: expected {expected}, got {actual}"
    );
}
