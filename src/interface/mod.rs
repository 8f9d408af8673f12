mod checkpoint;
mod crawler;
mod failure_log;
mod fetcher;
mod sink;

pub use checkpoint::*;
pub use crawler::*;
pub use failure_log::*;
pub use fetcher::*;
pub use sink::*;
