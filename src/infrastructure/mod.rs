mod checkpoint_file;
mod crawler_sequential;
mod failure_log_file;
mod fetcher_graphql;
mod sink_filesystem;

pub use checkpoint_file::*;
pub use crawler_sequential::*;
pub use failure_log_file::*;
pub use fetcher_graphql::*;
pub use sink_filesystem::*;
