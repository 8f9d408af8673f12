use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// The cause of a failed page fetch.
#[derive(Error, Debug)]
pub enum FetchErrorKind {
    /// Network or connection failure; the request may never have reached the endpoint.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered but rejected the request.
    #[error("Status error: {0}")]
    Status(String),

    /// The response arrived but its payload did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// A failed page fetch, tagged with the page coordinates it was issued for.
#[derive(Error, Debug)]
#[error("Fetching page at offset={offset} limit={limit} failed: {kind}")]
pub struct FetchError {
    /// The offset of the failed page request.
    pub offset: u64,

    /// The limit of the failed page request.
    pub limit: u32,

    /// The underlying cause.
    #[source]
    pub kind: FetchErrorKind,
}

impl FetchError {
    /// Creates a new `FetchError` for the given page coordinates.
    pub fn new(offset: u64, limit: u32, kind: FetchErrorKind) -> Self {
        Self {
            offset,
            limit,
            kind,
        }
    }

    /// Whether retrying the identical request can plausibly succeed.
    ///
    /// A malformed payload will be malformed again; transport and status
    /// failures may be transient.
    pub fn is_retryable(&self) -> bool {
        !matches!(self.kind, FetchErrorKind::Decode(_))
    }
}
