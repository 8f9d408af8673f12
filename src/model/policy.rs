use std::fmt::Display;

/// The configured response to a single page's fetch failure.
///
/// Every variant is bounded: a crawl can never loop forever on a failing
/// offset, it either gives up on the page or on the whole crawl.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailurePolicy {
    /// Stop the crawl on the first failure; the checkpoint keeps the failing
    /// offset so a later run resumes there.
    Abort,

    /// Retry the same offset up to `max_attempts` times in total, then abort.
    Retry {
        /// The maximum number of attempts for one offset, including the first.
        max_attempts: u32,
    },

    /// Log the failure and move on to the next offset, leaving a gap that is
    /// discoverable only through the error log.
    Skip,
}

impl FailurePolicy {
    /// Whether the page at a failed offset should be attempted again, given
    /// how many attempts it has already consumed.
    pub fn should_retry(&self, attempts: u32) -> bool {
        match self {
            FailurePolicy::Retry { max_attempts } => attempts < *max_attempts,
            FailurePolicy::Abort | FailurePolicy::Skip => false,
        }
    }
}

impl Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Retry { max_attempts } => {
                write!(f, "retry (max_attempts={max_attempts})")
            }
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}
