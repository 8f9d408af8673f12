use crate::{FailureRecord, StdResult};

/// A trait for the append-only log of failed fetches.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FailureLog: Sync + Send {
    /// Appends one failure record to the log.
    async fn append(&self, record: &FailureRecord) -> StdResult<()>;
}
