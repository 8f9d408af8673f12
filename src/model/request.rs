use std::fmt::Display;

use serde::Serialize;

/// A request for one page of the registry result set.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Hash)]
pub struct PageRequest {
    /// The position of the first record to return.
    pub(crate) offset: u64,

    /// The maximum number of records to return.
    pub(crate) limit: u32,
}

impl PageRequest {
    /// Creates a new `PageRequest` with the given offset and limit.
    pub fn new(offset: u64, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Retrieves the offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Retrieves the limit.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The request for the page immediately after this one.
    ///
    /// Offsets advance by exactly `limit`, so every offset issued within one
    /// crawl is a multiple of the page size.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset + self.limit as u64,
            limit: self.limit,
        }
    }
}

impl Display for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PageRequest: offset={}, limit={}", self.offset, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_offset_by_exactly_the_limit() {
        let request = PageRequest::new(0, 20);

        let next = request.next();
        let after_next = next.next();

        assert_eq!(next, PageRequest::new(20, 20));
        assert_eq!(after_next, PageRequest::new(40, 20));
    }

    #[test]
    fn next_preserves_the_limit() {
        let request = PageRequest::new(300, 100);

        assert_eq!(request.next().limit(), 100);
    }
}
