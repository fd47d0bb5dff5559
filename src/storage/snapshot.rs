use std::fs;
use std::io::{BufWriter, Write};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use crate::core::error::{Error, Result};
use crate::core::types::Article;
use crate::storage::layout::StorageLayout;

/// Bulk JSON dump of every article, in creation order.
pub struct Snapshot;

impl Snapshot {
    /// Load the snapshot file. A missing file is reported as `NotFound`.
    pub fn load(storage: &StorageLayout) -> Result<Vec<Article>> {
        let path = storage.snapshot_path();
        if !path.exists() {
            warn!(path = %path.display(), "No snapshot file found");
            return Err(Error::not_found("No articles file found"));
        }

        let data = fs::read(&path)?;
        let articles: Vec<Article> = serde_json::from_slice(&data)?;
        debug!(path = %path.display(), count = articles.len(), "Read snapshot");
        Ok(articles)
    }

    /// Save the snapshot file, replacing any previous one.
    pub fn save(storage: &StorageLayout, articles: &[Article]) -> Result<()> {
        let path = storage.snapshot_path();

        // Write next to the target and rename over it
        let tmp = NamedTempFile::new_in(storage.base_dir())?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer(&mut writer, articles)?;
            writer.flush()?;
        }
        tmp.persist(&path)?;

        debug!(path = %path.display(), count = articles.len(), "Wrote snapshot");
        Ok(())
    }
}
