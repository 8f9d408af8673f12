use crate::{Page, StdResult};

/// A trait for durably storing fetched pages, keyed by their offset.
///
/// Distinct offsets never collide, and writing the same offset twice must
/// overwrite rather than corrupt, so a crawl can be re-run from scratch.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PageSink: Sync + Send {
    /// Writes one page under its offset key.
    async fn write(&self, offset: u64, page: &Page) -> StdResult<()>;
}
