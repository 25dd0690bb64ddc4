//! SQLite schema for the inventory database
//!
//! Two tables: `items` for inventory lines and `users` for credentials.
//! The schema version is kept in SQLite's `user_version` pragma and
//! compared at open time; a version increase recreates `items` only,
//! `users` rows survive upgrades.

use rusqlite::{Connection, Result};
use tracing::info;

/// Current schema version, compared against `user_version` at open
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Inventory lines
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL
        );

        -- Registered users
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL
        );
        "#,
    )?;

    set_schema_version(conn, SCHEMA_VERSION)
}

/// Destructive upgrade: drops and recreates `items` only.
///
/// `users` is intentionally left untouched across version bumps.
pub fn upgrade_schema(conn: &Connection, old_version: i32, new_version: i32) -> Result<()> {
    info!(old_version, new_version, "upgrading schema, items table will be recreated");

    conn.execute_batch("DROP TABLE IF EXISTS items;")?;
    init_schema(conn)
}

/// Initialize or upgrade the schema as needed
///
/// A fresh database reports version 0 and gets the full schema. A
/// database at an older version goes through `upgrade_schema`.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let version = schema_version(conn)?;
    if version == 0 {
        init_schema(conn)
    } else if version < SCHEMA_VERSION {
        upgrade_schema(conn, version, SCHEMA_VERSION)
    } else {
        Ok(())
    }
}

/// Get the current schema version from the database
pub fn schema_version(conn: &Connection) -> Result<i32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)
}
