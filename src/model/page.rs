use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fetched page of the registry result set.
///
/// Records are opaque JSON documents; the crawler never inspects them beyond
/// counting how many a page holds.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Page {
    /// The total number of matching records reported by the endpoint, when it
    /// reports one.
    pub(crate) count: Option<u64>,

    /// The records of this page.
    pub(crate) records: Vec<Value>,
}

impl Page {
    /// Creates a new `Page` instance with the given count and records.
    pub fn new(count: Option<u64>, records: Vec<Value>) -> Self {
        Self { count, records }
    }

    /// Retrieves the reported total count, if any.
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    /// Retrieves the records of this page.
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Whether this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether this page holds fewer records than were asked for.
    ///
    /// An under-full page is treated as the last page. This is a heuristic:
    /// under concurrent mutation of the backing store the endpoint may return
    /// a short page that is not final. Re-running the crawl is safe because
    /// writes are idempotent per offset.
    pub fn is_short(&self, limit: u32) -> bool {
        (self.records.len() as u64) < limit as u64
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn full_page_is_neither_empty_nor_short() {
        let page = Page::new(Some(10), vec![json!({"key": "a"}), json!({"key": "b"})]);

        assert!(!page.is_empty());
        assert!(!page.is_short(2));
    }

    #[test]
    fn under_full_page_is_short() {
        let page = Page::new(Some(3), vec![json!({"key": "a"})]);

        assert!(page.is_short(2));
        assert!(!page.is_empty());
    }

    #[test]
    fn empty_page_is_both_empty_and_short() {
        let page = Page::new(Some(0), vec![]);

        assert!(page.is_empty());
        assert!(page.is_short(1));
    }
}
