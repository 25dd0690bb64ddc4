//! Record store
//!
//! Durable CRUD over the `items` and `users` tables. The store owns the
//! database path; every operation opens its own connection and releases
//! it before returning, so no handle is held across calls and no
//! operation spans more than one statement.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::debug;

use crate::config::Config;
use crate::models::Item;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::schema::ensure_schema;

/// Handle to the inventory database
///
/// Cloning is cheap; clones operate on the same database file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    db_path: PathBuf,
}

impl RecordStore {
    /// Open the store at the configured database path
    pub fn open(config: &Config) -> StoreResult<Self> {
        Self::at_path(config.db_path())
    }

    /// Open the store at a specific database path
    ///
    /// Creates the parent directory if needed and initializes or
    /// upgrades the schema. The connection used for the schema check is
    /// released before this returns.
    pub fn at_path(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let db_path = path.into();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let store = Self { db_path };
        let conn = store.connect()?;
        ensure_schema(&conn)?;
        debug!(path = %store.db_path.display(), "record store opened");

        Ok(store)
    }

    /// Path to the underlying database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> StoreResult<Connection> {
        Connection::open(&self.db_path).map_err(|source| StoreError::Open {
            path: self.db_path.clone(),
            source,
        })
    }

    // ==================== Items ====================

    /// Insert a new item, returning the store-assigned id
    pub fn insert_item(&self, name: &str, quantity: i64) -> StoreResult<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO items (name, quantity) VALUES (?1, ?2)",
            params![name, quantity],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Get all items in ascending-id order
    pub fn list_items(&self) -> StoreResult<Vec<Item>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT id, name, quantity FROM items ORDER BY id ASC")?;

        let items = stmt
            .query_map([], |row| {
                Ok(Item {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    /// Overwrite name and quantity for an item
    ///
    /// An unknown id is a silent no-op.
    pub fn update_item(&self, id: i64, name: &str, quantity: i64) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE items SET name = ?1, quantity = ?2 WHERE id = ?3",
            params![name, quantity, id],
        )?;
        Ok(())
    }

    /// Delete an item by id
    ///
    /// An unknown id is a silent no-op.
    pub fn delete_item(&self, id: i64) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ==================== Credentials ====================

    /// True iff a user row matches both fields exactly (case-sensitive,
    /// no normalization)
    pub fn find_credential(&self, username: &str, password: &str) -> StoreResult<bool> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT 1 FROM users WHERE username = ?1 AND password = ?2")?;
        let exists = stmt.exists(params![username, password])?;
        Ok(exists)
    }

    /// Insert a new credential
    ///
    /// Duplicate usernames and any other failure of the insert statement
    /// surface as `false`, not an error.
    pub fn insert_credential(&self, username: &str, password: &str) -> StoreResult<bool> {
        let conn = self.connect()?;
        match conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, password],
        ) {
            Ok(_) => Ok(true),
            Err(err) => {
                debug!(error = %err, username, "credential insert rejected");
                Ok(false)
            }
        }
    }
}
