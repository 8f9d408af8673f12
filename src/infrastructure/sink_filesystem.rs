use std::path::{Path, PathBuf};

use log::info;

use crate::{Page, PageSink, StdResult};

/// A sink that stores each page as one JSON file in an output directory.
///
/// Files are named by their page offset, so distinct offsets never collide
/// and re-running a crawl overwrites each file with identical content.
pub struct FileSystemSink {
    output_dir: PathBuf,
}

impl FileSystemSink {
    /// Creates a new `FileSystemSink` instance, creating the output directory
    /// if it does not exist yet.
    pub async fn try_new(output_dir: &Path) -> StdResult<Self> {
        tokio::fs::create_dir_all(output_dir).await?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// The file path under which the page at the given offset is stored.
    pub fn page_path(&self, offset: u64) -> PathBuf {
        self.output_dir.join(format!("page-{offset}.json"))
    }
}

#[async_trait::async_trait]
impl PageSink for FileSystemSink {
    async fn write(&self, offset: u64, page: &Page) -> StdResult<()> {
        let path = self.page_path(offset);
        let body = serde_json::to_vec_pretty(page)?;
        tokio::fs::write(&path, body).await?;
        info!(
            "Wrote page offset={offset} records={} to {}",
            page.records().len(),
            path.display()
        );

        Ok(())
    }
}
