//! SQLite-backed key/value store
//!
//! Values are stored as text. An optional expiry makes a key read as absent
//! once it has passed.

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use super::{StoreResult, STORE_FILE};

pub struct LocalStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl LocalStore {
    /// Create or open the store inside `data_dir`
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORE_FILE);

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        let store = Self {
            conn: Mutex::new(conn),
            path: Some(path),
        };
        store.init_schema()?;
        tracing::debug!(path = ?store.path, "Opened local store");
        Ok(store)
    }

    /// Store that lives only as long as the value
    pub fn in_memory() -> StoreResult<Self> {
        let store = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
            path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        self.conn.lock()?.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL,
                expires_at INTEGER
            )",
            [],
        )?;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock()?;
        let row: Option<(String, Option<i64>)> = conn
            .query_row(
                "SELECT value, expires_at FROM kv WHERE key = ?",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((_, Some(expires_at))) if expires_at <= now_ms() => {
                conn.execute("DELETE FROM kv WHERE key = ?", params![key])?;
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value)),
            None => Ok(None),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.write(key, value, None)
    }

    /// Store a value that reads as absent after `ttl`
    pub fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let expires_at = now_ms().saturating_add(ttl.as_millis() as i64);
        self.write(key, value, Some(expires_at))
    }

    fn write(&self, key: &str, value: &str, expires_at: Option<i64>) -> StoreResult<()> {
        self.conn.lock()?.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at, expires_at)
             VALUES (?, ?, ?, ?)",
            params![key, value, now_ms(), expires_at],
        )?;
        Ok(())
    }

    /// Returns whether the key existed
    pub fn remove(&self, key: &str) -> StoreResult<bool> {
        let changed = self
            .conn
            .lock()?
            .execute("DELETE FROM kv WHERE key = ?", params![key])?;
        Ok(changed > 0)
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        self.set(key, &serde_json::to_string(value)?)
    }
}
