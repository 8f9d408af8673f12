use crate::{CrawlReport, StdResult};

/// A trait for retrieving the complete registry result set page by page.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RegistryCrawler {
    /// Runs the crawl to completion and reports what was done.
    async fn crawl(&self) -> StdResult<CrawlReport>;
}
