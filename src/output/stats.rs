//! Statistics reporting from the document store

use crate::storage::DocumentStore;
use crate::Result;

/// Store contents summary
#[derive(Debug, Clone)]
pub struct StoreStatistics {
    /// Total number of stored documents
    pub total_records: u64,

    /// Smallest and largest stored id, when any documents exist
    pub id_range: Option<(u32, u32)>,

    /// Documents per type name, most common first
    pub type_tally: Vec<(String, u64)>,
}

/// Loads statistics from the store
pub fn load_statistics(store: &dyn DocumentStore) -> Result<StoreStatistics> {
    Ok(StoreStatistics {
        total_records: store.count()?,
        id_range: store.id_range()?,
        type_tally: store.type_tally()?,
    })
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &StoreStatistics) {
    println!("=== Store Statistics ===\n");

    println!("Overview:");
    println!("  Total records: {}", stats.total_records);
    match stats.id_range {
        Some((min, max)) => println!("  Id range: {} - {}", min, max),
        None => println!("  Id range: (empty)"),
    }
    println!();

    println!("Records by Type:");
    for (type_name, count) in &stats.type_tally {
        let percentage = if stats.total_records > 0 {
            (*count as f64 / stats.total_records as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", type_name, count, percentage);
    }
}
