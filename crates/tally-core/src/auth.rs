//! Credential gate
//!
//! Thin authentication and registration over the `users` table. No
//! hashing, no lockout, no sessions; lookups are exact-match and
//! case-sensitive.

use crate::storage::{RecordStore, StoreResult};

/// Authentication and registration over the record store
pub struct CredentialGate {
    store: RecordStore,
}

impl CredentialGate {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// True iff a registered credential matches both fields exactly
    pub fn authenticate(&self, username: &str, password: &str) -> StoreResult<bool> {
        self.store.find_credential(username, password)
    }

    /// Register a new user
    ///
    /// Both fields are trimmed; an empty field rejects without touching
    /// the store. A duplicate username reports `false`, not an error.
    pub fn register(&self, username: &str, password: &str) -> StoreResult<bool> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Ok(false);
        }

        self.store.insert_credential(username, password)
    }
}
