use std::path::{Path, PathBuf};

use crate::{CheckpointStore, CrawlState, StdResult};

/// A checkpoint store keeping the crawl state as one small JSON file.
///
/// An absent file means no crawl has been started yet.
pub struct FileCheckpointStore {
    path: PathBuf,
}

impl FileCheckpointStore {
    /// Creates a new `FileCheckpointStore` instance backed by the given path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl CheckpointStore for FileCheckpointStore {
    async fn load(&self) -> StdResult<Option<CrawlState>> {
        match tokio::fs::read(&self.path).await {
            Ok(content) => Ok(Some(serde_json::from_slice(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, state: &CrawlState) -> StdResult<()> {
        let body = serde_json::to_vec_pretty(state)?;
        tokio::fs::write(&self.path, body).await?;

        Ok(())
    }
}
