//! Database schema definitions

/// SQL schema for the document store.
///
/// One row per entity: the enriched document is stored whole as JSON, with
/// `id` as the unique upsert key and `name` indexed for the read side.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS pokemon (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    document TEXT NOT NULL,
    crawled_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pokemon_name ON pokemon(name);
"#;

/// Initializes the database schema; safe to repeat every run
pub fn initialize_schema(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
