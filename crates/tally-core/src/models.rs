//! Data models for tally
//!
//! Defines the core data structures: Item and Credential.
//! Both are free-standing values; the record store holds the
//! authoritative rows.

use serde::{Deserialize, Serialize};

/// One inventory line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, assigned by the store on insert
    pub id: i64,
    /// Item name (non-empty)
    pub name: String,
    /// Quantity on hand (non-negative; validated by callers, not the store)
    pub quantity: i64,
}

impl Item {
    /// Create an item with a known id (as loaded from storage)
    pub fn new(id: i64, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

/// A registered user
///
/// Passwords are stored verbatim. This mirrors the system being
/// replaced; do not reuse this type outside of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    /// Unique identifier, assigned by the store on insert
    pub id: i64,
    /// Username, unique across all credentials
    pub username: String,
    /// Password, stored in cleartext
    pub password: String,
}

impl Credential {
    /// Create a credential with a known id (as loaded from storage)
    pub fn new(id: i64, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }
}
