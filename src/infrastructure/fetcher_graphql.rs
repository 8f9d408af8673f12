#![allow(non_snake_case)]

use std::{collections::HashMap, time::Duration};

use anyhow::anyhow;
use gql_client::{Client, ClientConfig, GraphQLError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FetchError, FetchErrorKind, Page, PageFetcher, PageRequest, StdResult};

/// The GraphQL production endpoint for the registry.
pub const REGISTRY_GRAPHQL_ENDPOINT: &str = "https://graphql.gbif.org/graphql";

/// The default bound on how long one page request may wait for a response.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(120);

const DATASET_SEARCH_QUERY: &str = r#"
query ($limit: Int!, $offset: Int!) {
  datasetSearch(limit: $limit, offset: $offset) {
    count
    results {
      key
      title
      type
      publishingOrganizationKey
      license
    }
  }
}
"#;

#[derive(Deserialize, Debug)]
struct DatasetSearchData {
    datasetSearch: DatasetSearchResult,
}

#[derive(Deserialize, Debug)]
struct DatasetSearchResult {
    count: Option<u64>,
    results: Vec<Value>,
}

/// The variables of one page query.
#[derive(Debug, Serialize)]
struct PageVariables {
    /// The maximum number of records to return.
    limit: u32,
    /// The position of the first record to return.
    offset: u64,
}

impl From<&PageRequest> for PageVariables {
    fn from(request: &PageRequest) -> Self {
        Self {
            limit: request.limit(),
            offset: request.offset(),
        }
    }
}

/// Configuration for the GraphQL fetcher.
///
/// Passed in at construction time; the fetcher holds no process-wide state.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// The GraphQL endpoint URL.
    pub endpoint: String,

    /// The bound on how long one page request may wait for a response.
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: REGISTRY_GRAPHQL_ENDPOINT.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Fetches result pages from the registry's GraphQL API.
#[derive(Debug)]
pub struct GraphQlFetcher {
    client: Client,
}

impl GraphQlFetcher {
    /// Creates a new `GraphQlFetcher` instance with the given configuration.
    pub fn try_new(config: &FetcherConfig) -> StdResult<Self> {
        if config.endpoint.is_empty() {
            return Err(anyhow!("Fetcher endpoint must not be empty"));
        }
        let headers = HashMap::from([("User-Agent".to_string(), "registry-crawler".to_string())]);
        let client = Client::new_with_config(ClientConfig {
            endpoint: config.endpoint.to_owned(),
            timeout: Some(config.timeout.as_secs()),
            headers: Some(headers),
            proxy: None,
        });

        Ok(Self { client })
    }

    fn classify(error: GraphQLError) -> FetchErrorKind {
        let message = error.message().to_string();
        if message.contains("Failed to parse response") {
            FetchErrorKind::Decode(message)
        } else if error.json().is_some() {
            FetchErrorKind::Status(message)
        } else {
            FetchErrorKind::Transport(message)
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher for GraphQlFetcher {
    async fn fetch(&self, request: &PageRequest) -> Result<Page, FetchError> {
        let fetched_data = self
            .client
            .query_with_vars_unwrap::<DatasetSearchData, PageVariables>(
                DATASET_SEARCH_QUERY,
                request.into(),
            )
            .await
            .map_err(|e| {
                FetchError::new(request.offset(), request.limit(), Self::classify(e))
            })?;

        Ok(Page::new(
            fetched_data.datasetSearch.count,
            fetched_data.datasetSearch.results,
        ))
    }
}
