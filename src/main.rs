use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::{Parser, ValueEnum};
use log::{debug, info};

use registry_crawler::{
    CrawlerConfig, FailurePolicy, FetcherConfig, FileCheckpointStore, FileFailureLog,
    FileSystemSink, GraphQlFetcher, REGISTRY_GRAPHQL_ENDPOINT, RegistryCrawler, SequentialCrawler,
    StdResult,
};

/// The configured response to a single page's fetch failure.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum FailurePolicyArg {
    /// Stop the crawl on the first failure.
    Abort,
    /// Retry the failing offset a bounded number of times, then abort.
    Retry,
    /// Log the failure and continue with the next offset.
    Skip,
}

/// Command line arguments for the registry crawler
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GraphQL endpoint of the registry search API
    #[arg(short, long, env = "REGISTRY_GRAPHQL_ENDPOINT", default_value = REGISTRY_GRAPHQL_ENDPOINT)]
    endpoint: String,

    /// Number of records fetched per page
    #[arg(short, long, default_value_t = 100)]
    page_size: u32,

    /// Directory receiving one JSON file per fetched page
    #[arg(short, long, default_value = "pages")]
    output_dir: PathBuf,

    /// Path of the crawl state checkpoint file
    #[arg(short, long, default_value = "crawl-state.json")]
    checkpoint_path: PathBuf,

    /// Path of the append-only fetch failure log
    #[arg(short = 'l', long, default_value = "fetch-failures.jsonl")]
    error_log_path: PathBuf,

    /// Response to a single page's fetch failure
    #[arg(short, long, value_enum, default_value_t = FailurePolicyArg::Abort)]
    failure_policy: FailurePolicyArg,

    /// Maximum number of attempts per offset under the retry policy
    #[arg(short, long, default_value_t = 3)]
    max_retries: u32,

    /// Bound on how long one page request may wait for a response, in seconds
    #[arg(short, long, default_value_t = 120)]
    timeout_seconds: u64,
}

impl Args {
    fn failure_policy(&self) -> FailurePolicy {
        match self.failure_policy {
            FailurePolicyArg::Abort => FailurePolicy::Abort,
            FailurePolicyArg::Retry => FailurePolicy::Retry {
                max_attempts: self.max_retries,
            },
            FailurePolicyArg::Skip => FailurePolicy::Skip,
        }
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting registry crawling");
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let crawler = build_sequential_crawler(&args).await?;
    let report = crawler.crawl().await?;
    info!("Crawling completed: {report}");

    Ok(())
}

async fn build_sequential_crawler(args: &Args) -> StdResult<Arc<dyn RegistryCrawler>> {
    let fetcher = Arc::new(GraphQlFetcher::try_new(&FetcherConfig {
        endpoint: args.endpoint.to_owned(),
        timeout: Duration::from_secs(args.timeout_seconds),
    })?);
    let sink = Arc::new(FileSystemSink::try_new(&args.output_dir).await?);
    let failure_log = Arc::new(FileFailureLog::new(&args.error_log_path));
    let checkpoint = Arc::new(FileCheckpointStore::new(&args.checkpoint_path));
    let config = CrawlerConfig {
        page_size: args.page_size,
        failure_policy: args.failure_policy(),
        ..CrawlerConfig::default()
    };

    Ok(Arc::new(SequentialCrawler::new(
        fetcher,
        sink,
        failure_log,
        checkpoint,
        config,
    )))
}
