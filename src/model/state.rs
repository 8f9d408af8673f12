use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persistable state of one crawl.
///
/// Created at offset 0, advanced after each page, and saved through a
/// checkpoint store so an interrupted crawl resumes from the first page that
/// was not completed instead of restarting from scratch.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CrawlState {
    /// The offset of the next page to fetch.
    pub(crate) offset: u64,

    /// The page size this crawl was started with.
    pub(crate) limit: u32,

    /// Whether the crawl reached the end of the result set.
    pub(crate) completed: bool,
}

impl CrawlState {
    /// Creates the state of a fresh crawl with the given page size.
    pub fn new(limit: u32) -> Self {
        Self {
            offset: 0,
            limit,
            completed: false,
        }
    }

    /// Retrieves the offset of the next page to fetch.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Retrieves the page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Whether the crawl reached the end of the result set.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Advances the state past the page at the current offset.
    pub fn advance(&mut self) {
        self.offset += self.limit as u64;
    }

    /// Marks the crawl as complete.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

impl Display for CrawlState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CrawlState: offset={}, limit={}, completed={}",
            self.offset, self.limit, self.completed
        )
    }
}

/// A single failed fetch, as recorded in the error log.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct FailureRecord {
    /// The offset of the failed page request.
    pub(crate) offset: u64,

    /// The limit of the failed page request.
    pub(crate) limit: u32,

    /// When the failure was observed.
    pub(crate) timestamp: DateTime<Utc>,
}

impl FailureRecord {
    /// Creates a new `FailureRecord` timestamped with the current time.
    pub fn now(offset: u64, limit: u32) -> Self {
        Self {
            offset,
            limit,
            timestamp: Utc::now(),
        }
    }

    /// Retrieves the offset of the failed page request.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Retrieves the limit of the failed page request.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Display for FailureRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FailureRecord: offset={}, limit={}, timestamp={}",
            self.offset, self.limit, self.timestamp
        )
    }
}

/// A summary of one finished crawl.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct CrawlReport {
    /// The number of pages written to the sink.
    pub pages_written: u64,

    /// The number of records fetched across all written pages.
    pub records_fetched: u64,

    /// The number of fetch failures recorded.
    pub failures: u32,
}

impl Display for CrawlReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pages: written={}, Records: fetched={}, Failures: recorded={}",
            self.pages_written, self.records_fetched, self.failures
        )
    }
}
