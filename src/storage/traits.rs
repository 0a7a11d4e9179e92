//! Storage trait and error types

use crate::model::EntityRecord;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Document-store interface for enriched entity records.
///
/// Upserts have whole-document create-or-replace semantics keyed by
/// `record.id`; the pipeline never reads back what it wrote, the read side
/// exists for the stats and export modes.
pub trait DocumentStore {
    /// Ensures uniqueness and lookup indexes exist.
    ///
    /// Idempotent; the orchestrator calls this at the start of every run.
    fn ensure_indexes(&mut self) -> StorageResult<()>;

    /// Inserts or replaces the whole document keyed by `record.id`
    fn upsert(&mut self, record: &EntityRecord) -> StorageResult<()>;

    /// Fetches one document by id
    fn get(&self, id: u32) -> StorageResult<Option<EntityRecord>>;

    /// Lists `(id, name)` pairs for all stored documents, ordered by id
    fn list_summaries(&self) -> StorageResult<Vec<(u32, String)>>;

    /// Loads every stored document, ordered by id
    fn all_documents(&self) -> StorageResult<Vec<EntityRecord>>;

    /// Counts stored documents
    fn count(&self) -> StorageResult<u64>;

    /// Smallest and largest stored id, or `None` when empty
    fn id_range(&self) -> StorageResult<Option<(u32, u32)>>;

    /// Tally of stored documents per type name, most common first
    fn type_tally(&self) -> StorageResult<Vec<(String, u64)>>;
}
