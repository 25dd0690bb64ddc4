//! Storage error handling
//!
//! Typed errors for record store operations. Store-level faults are
//! fatal for the requested operation, not for the process; nothing in
//! this layer retries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during record store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create the data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to open the database file
    #[error("Failed to open database at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite statement failure (I/O error, disk full, corrupt database)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    /// True when the underlying SQLite error is a constraint violation,
    /// e.g. a duplicate username on the `users` table.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            StoreError::Database(err) | StoreError::Open { source: err, .. } => {
                is_constraint_violation(err)
            }
            _ => false,
        }
    }
}

/// Check whether a SQLite error is a constraint violation
pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: rusqlite::ErrorCode::ConstraintViolation,
                ..
            },
            _,
        )
    )
}

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_constraint_violation_classification() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE NOT NULL)")
            .unwrap();
        conn.execute("INSERT INTO t (name) VALUES ('a')", [])
            .unwrap();

        let err = conn
            .execute("INSERT INTO t (name) VALUES ('a')", [])
            .unwrap_err();
        assert!(is_constraint_violation(&err));

        let store_err = StoreError::Database(err);
        assert!(store_err.is_constraint_violation());
    }

    #[test]
    fn test_non_constraint_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute("SELECT * FROM missing", []).unwrap_err();
        assert!(!is_constraint_violation(&err));
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::CreateDirectory {
            path: PathBuf::from("/test/dir"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("data directory"));
        assert!(msg.contains("/test/dir"));
    }
}
