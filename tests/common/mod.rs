//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating a test data directory with an optional snapshot file
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the snapshot file inside the data directory
    pub fn snapshot_path(&self) -> PathBuf {
        self.temp_dir.path().join("history.json")
    }

    /// Write a raw history snapshot
    pub fn with_snapshot(self, content: &str) -> Self {
        fs::write(self.snapshot_path(), content).expect("Failed to write history snapshot");
        self
    }

    /// Write a snapshot built from entry builders
    pub fn with_entries(self, entries: &[StoredEntryBuilder]) -> Self {
        let items = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join(",");
        self.with_snapshot(&format!("[{items}]"))
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for persisted history entries
pub struct StoredEntryBuilder {
    id: String,
    timestamp: i64,
    problem_analysis: String,
    estimated_cost_czk: u64,
    device_type: String,
    device_model: String,
    problem_description: String,
}

impl StoredEntryBuilder {
    /// Create a new entry with default values
    pub fn new() -> Self {
        Self {
            id: "test-id".to_string(),
            timestamp: 1_700_000_000_000,
            problem_analysis: "Test analysis".to_string(),
            estimated_cost_czk: 1000,
            device_type: "phone".to_string(),
            device_model: String::new(),
            problem_description: "Test problem".to_string(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn analysis(mut self, text: &str) -> Self {
        self.problem_analysis = text.to_string();
        self
    }

    pub fn cost(mut self, czk: u64) -> Self {
        self.estimated_cost_czk = czk;
        self
    }

    pub fn device_model(mut self, model: &str) -> Self {
        self.device_model = model.to_string();
        self
    }

    pub fn problem(mut self, description: &str) -> Self {
        self.problem_description = description.to_string();
        self
    }

    /// Serialize to the persisted snapshot shape
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"id":"{}","timestamp":{},"problem_analyza":"{}","odhadovana_cena_kc":{},"klady_opravy":[],"zapory_opravy":[],"deviceType":"{}","deviceModel":"{}","problemDescription":"{}"}}"#,
            self.id,
            self.timestamp,
            self.problem_analysis,
            self.estimated_cost_czk,
            self.device_type,
            self.device_model,
            self.problem_description,
        )
    }
}

impl Default for StoredEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
