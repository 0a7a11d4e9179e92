//! Crawl orchestration and HTTP transport

mod coordinator;
mod fetcher;

pub use coordinator::{crawl, Coordinator};
pub use fetcher::Fetcher;
