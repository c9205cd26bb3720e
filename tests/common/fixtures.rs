//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crumbs::trail::Breadcrumb;

/// The five keyed items used throughout the scenarios; item 2 has an empty children list
pub fn keyed_items() -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::keyed("1"),
        Breadcrumb::keyed("2").with_children(Vec::new()),
        Breadcrumb::keyed("3"),
        Breadcrumb::keyed("4"),
        Breadcrumb::keyed("5"),
    ]
}

/// A scratch directory for config and trail files with automatic cleanup
pub struct TestWorkspace {
    pub temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a new file in the workspace
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Create a config.toml with the given body
    pub fn create_config(&self, body: &str) -> Result<PathBuf> {
        self.create_file("config.toml", body)
    }

    /// Create a JSON trail file from breadcrumbs
    pub fn create_trail(&self, name: &str, crumbs: &[Breadcrumb]) -> Result<PathBuf> {
        let json = serde_json::to_string(crumbs)?;
        self.create_file(name, &json)
    }
}
