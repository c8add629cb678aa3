//! `SQLite`-based key-value storage.
//!
//! This module provides the persistent store behind both the task list and
//! the settings flags. Everything lives in one table of one database file:
//! each key holds a single JSON-encoded value, mirroring the flat key-value
//! layout the data model calls for.

use crate::error::Result;
use crate::paths;
use crate::traits::KeyValueStore;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Key name constants for consistent usage across the codebase.
pub mod keys {
    /// The ordered list of encoded task records.
    pub const TASKS: &str = "tasks";
    /// UI dark mode flag.
    pub const DARK_MODE_ENABLED: &str = "darkModeEnabled";
    /// Notification opt-in flag.
    pub const NOTIFICATIONS_ENABLED: &str = "notificationsEnabled";
    /// Font size index (0 = Small, 1 = Medium, 2 = Large).
    pub const FONT_SIZE_INDEX: &str = "fontSizeIndex";
    /// Theme index (0 = Light, 1 = Dark, 2 = System).
    pub const THEME_INDEX: &str = "themeIndex";
    /// Biometric lock flag.
    pub const BIOMETRIC_ENABLED: &str = "biometricEnabled";
}

/// SQLite-based key-value store.
///
/// Each operation opens a new connection to the database file. This avoids
/// thread safety issues and is acceptable for the low frequency of store
/// operations.
#[derive(Debug, Clone)]
pub struct SqliteKvStore {
    /// Path to the database file.
    db_path: PathBuf,
}

impl SqliteKvStore {
    /// Create a new `SQLite` store at the given database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = Self { db_path: db_path.as_ref().to_path_buf() };
        store.init_schema()?;
        Ok(store)
    }

    /// Create a new `SQLite` store in the given data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        Self::new(data_dir.join(paths::DATABASE_FILENAME))
    }

    /// Get the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection to the database.
    fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;")?;
        Ok(conn)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute_batch(
            r"
            -- One JSON-encoded value per key
            CREATE TABLE IF NOT EXISTS kv_entries (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let conn = self.open()?;
        let raw: Option<String> = conn
            .query_row("SELECT value FROM kv_entries WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        // A cell that is not valid JSON is kept as a plain string rather
        // than surfaced as an error.
        Ok(raw.map(|s| serde_json::from_str(&s).unwrap_or(Value::String(s))))
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value.to_string()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.open()?;
        conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let conn = self.open()?;
        conn.execute("DELETE FROM kv_entries", [])?;
        Ok(())
    }
}
