use crate::{CrawlState, StdResult};

/// A trait for persisting crawl state between runs.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CheckpointStore: Sync + Send {
    /// Loads the persisted crawl state, or `None` when no crawl was started.
    async fn load(&self) -> StdResult<Option<CrawlState>>;

    /// Persists the given crawl state, replacing any previous one.
    async fn save(&self, state: &CrawlState) -> StdResult<()>;
}
