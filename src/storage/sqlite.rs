//! SQLite-backed document store

use crate::model::EntityRecord;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{DocumentStore, StorageResult};
use crate::PokedexError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite document store backend
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at the given path
    pub fn open(path: &Path) -> Result<Self, PokedexError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory store (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, PokedexError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl DocumentStore for SqliteStore {
    fn ensure_indexes(&mut self) -> StorageResult<()> {
        initialize_schema(&self.conn)?;
        Ok(())
    }

    fn upsert(&mut self, record: &EntityRecord) -> StorageResult<()> {
        let document = serde_json::to_string(record)?;
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO pokemon (id, name, document, crawled_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 document = excluded.document,
                 crawled_at = excluded.crawled_at",
            params![record.id, record.name, document, now],
        )?;
        Ok(())
    }

    fn get(&self, id: u32) -> StorageResult<Option<EntityRecord>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM pokemon WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn list_summaries(&self) -> StorageResult<Vec<(u32, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM pokemon ORDER BY id")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn all_documents(&self) -> StorageResult<Vec<EntityRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT document FROM pokemon ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut documents = Vec::new();
        for json in rows {
            documents.push(serde_json::from_str(&json?)?);
        }
        Ok(documents)
    }

    fn count(&self) -> StorageResult<u64> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))?;
        Ok(count)
    }

    fn id_range(&self) -> StorageResult<Option<(u32, u32)>> {
        let range: (Option<u32>, Option<u32>) = self.conn.query_row(
            "SELECT MIN(id), MAX(id) FROM pokemon",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(match range {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        })
    }

    fn type_tally(&self) -> StorageResult<Vec<(String, u64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT je.value, COUNT(*) AS n
             FROM pokemon, json_each(pokemon.document, '$.types') AS je
             GROUP BY je.value
             ORDER BY n DESC, je.value",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
