use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::{FailureLog, FailureRecord, StdResult};

/// An append-only failure log stored as one JSON line per failed fetch.
pub struct FileFailureLog {
    path: PathBuf,
}

impl FileFailureLog {
    /// Creates a new `FileFailureLog` instance writing to the given path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl FailureLog for FileFailureLog {
    async fn append(&self, record: &FailureRecord) -> StdResult<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        Ok(())
    }
}
