use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use log::{info, warn};
use tokio::time::sleep;

use crate::{
    CheckpointStore, CrawlReport, CrawlState, FailureLog, FailurePolicy, FailureRecord,
    PageFetcher, PageRequest, PageSink, RegistryCrawler, StdResult,
};

/// Configuration for a sequential crawl.
///
/// Passed in at construction time; the crawler holds no process-wide state.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// The number of records requested per page.
    pub page_size: u32,

    /// The configured response to a single page's fetch failure.
    pub failure_policy: FailurePolicy,

    /// The base delay for exponential backoff between retry attempts.
    pub retry_base_delay: Duration,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            failure_policy: FailurePolicy::Abort,
            retry_base_delay: Duration::from_secs(1),
        }
    }
}

/// A sequential crawler.
///
/// Issues one page request at a time, starting at offset 0 (or at the
/// checkpointed offset of an interrupted crawl), writes every fetched page to
/// the sink keyed by its offset, and records every fetch failure before the
/// failure policy decides whether to abort, retry, or skip.
pub struct SequentialCrawler {
    fetcher: Arc<dyn PageFetcher>,
    sink: Arc<dyn PageSink>,
    failure_log: Arc<dyn FailureLog>,
    checkpoint: Arc<dyn CheckpointStore>,
    config: CrawlerConfig,
}

impl SequentialCrawler {
    /// Creates a new `SequentialCrawler` instance with the given collaborators
    /// and configuration.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        sink: Arc<dyn PageSink>,
        failure_log: Arc<dyn FailureLog>,
        checkpoint: Arc<dyn CheckpointStore>,
        config: CrawlerConfig,
    ) -> Self {
        Self {
            fetcher,
            sink,
            failure_log,
            checkpoint,
            config,
        }
    }

    async fn initial_state(&self) -> StdResult<CrawlState> {
        match self.checkpoint.load().await? {
            Some(state) => {
                if state.limit() != self.config.page_size {
                    return Err(anyhow!(
                        "Checkpoint page size mismatch: checkpoint={}, configured={}; \
                         offsets would no longer be multiples of the page size",
                        state.limit(),
                        self.config.page_size
                    ));
                }
                info!("Resuming crawl from checkpoint: {state}");

                Ok(state)
            }
            None => Ok(CrawlState::new(self.config.page_size)),
        }
    }

    fn calculate_exponential_backoff_delay(&self, attempt: u32) -> Duration {
        self.config.retry_base_delay * (2u32.pow(attempt.min(31)))
    }
}

#[async_trait::async_trait]
impl RegistryCrawler for SequentialCrawler {
    async fn crawl(&self) -> StdResult<CrawlReport> {
        if self.config.page_size == 0 {
            return Err(anyhow!("Page size must be strictly positive"));
        }

        let mut state = self.initial_state().await?;
        if state.is_completed() {
            info!("Crawl already completed, nothing to do");
            return Ok(CrawlReport::default());
        }

        let mut report = CrawlReport::default();
        // Attempts consumed at the current offset; reset whenever the offset moves.
        let mut attempts = 0u32;
        while !state.is_completed() {
            let request = PageRequest::new(state.offset(), self.config.page_size);
            info!("Processing request: {request}");
            match self.fetcher.fetch(&request).await {
                Ok(page) => {
                    attempts = 0;
                    if page.is_empty() {
                        info!("Empty page at offset={}, crawl complete", request.offset());
                        state.complete();
                    } else {
                        self.sink.write(request.offset(), &page).await?;
                        report.pages_written += 1;
                        report.records_fetched += page.records().len() as u64;
                        if page.is_short(self.config.page_size) {
                            info!("Short page at offset={}, crawl complete", request.offset());
                            state.complete();
                        } else {
                            state.advance();
                        }
                    }
                }
                Err(e) => {
                    warn!("Fetch failed: {e}");
                    report.failures += 1;
                    self.failure_log
                        .append(&FailureRecord::now(request.offset(), request.limit()))
                        .await?;
                    attempts += 1;
                    match self.config.failure_policy {
                        FailurePolicy::Abort => {
                            self.checkpoint.save(&state).await?;
                            return Err(anyhow!(e)
                                .context(format!("Crawl aborted at offset={}", request.offset())));
                        }
                        FailurePolicy::Skip => {
                            warn!("Skipping page at offset={}", request.offset());
                            attempts = 0;
                            state.advance();
                        }
                        policy @ FailurePolicy::Retry { .. } => {
                            if !e.is_retryable() || !policy.should_retry(attempts) {
                                self.checkpoint.save(&state).await?;
                                return Err(anyhow!(e).context(format!(
                                    "Crawl aborted at offset={} after {attempts} attempts",
                                    request.offset()
                                )));
                            }
                            sleep(self.calculate_exponential_backoff_delay(attempts)).await;
                        }
                    }
                }
            }
            self.checkpoint.save(&state).await?;
            info!("Crawl progress: {report}, next offset={}", state.offset());
        }

        Ok(report)
    }
}
