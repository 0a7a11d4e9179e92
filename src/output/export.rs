//! JSON export of stored documents

use crate::storage::DocumentStore;
use crate::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes all stored documents to `path` as a pretty-printed JSON array.
///
/// Returns the number of documents written.
pub fn export_documents(store: &dyn DocumentStore, path: &Path) -> Result<u64> {
    let documents = store.all_documents()?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &documents)?;

    Ok(documents.len() as u64)
}
