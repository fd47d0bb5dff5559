use std::path::{Path, PathBuf};
use std::fs;
use crate::core::error::Result;

/// Directory structure for data files
#[derive(Debug, Clone)]
pub struct StorageLayout {
    pub base_dir: PathBuf,      // Root directory
}

impl StorageLayout {
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;

        Ok(StorageLayout {
            base_dir,
        })
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.base_dir.join("articles.json")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
