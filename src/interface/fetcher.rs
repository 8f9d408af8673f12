use crate::{FetchError, Page, PageRequest};

/// A trait for fetching one page of results from the registry endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PageFetcher: Sync + Send {
    /// Fetches the page addressed by the given request.
    ///
    /// A failure carries the page coordinates it was issued for; the caller
    /// decides whether it is fatal.
    async fn fetch(&self, request: &PageRequest) -> Result<Page, FetchError>;
}
