use super::db::Db;
use crate::libs::error::TaskResult;
use crate::libs::storage::Storage;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_KV: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// SQLite-backed [`Storage`] keeping every key in a single `kv` table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens `taskflow.db` in the platform data directory.
    pub fn new() -> Result<Self> {
        Self::from_db(Db::new()?)
    }

    pub fn from_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_KV, [])?;
        Ok(Self { conn: db.conn })
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> TaskResult<Option<String>> {
        let value = self.conn.query_row(SELECT_VALUE, params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> TaskResult<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }
}
