//! Read-side reporting: statistics and JSON export

mod export;
mod stats;

pub use export::export_documents;
pub use stats::{load_statistics, print_statistics, StoreStatistics};
