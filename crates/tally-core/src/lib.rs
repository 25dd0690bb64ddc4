//! Tally Core Library
//!
//! This crate provides the core functionality for tally, a local
//! inventory tracker backed by an embedded SQLite database.
//!
//! # Architecture
//!
//! - **Record Store**: durable CRUD over the `items` and `users` tables;
//!   source of truth for persisted data
//! - **Inventory Mirror**: ordered in-memory copy of the inventory,
//!   source of truth for display; every mutation yields a refresh signal
//! - **Credential Gate**: thin authenticate/register logic over `users`
//!
//! # Quick Start
//!
//! ```text
//! let store = RecordStore::open(&config)?;
//!
//! // Register and authenticate
//! let gate = CredentialGate::new(store.clone());
//! gate.register("alice", "pw1")?;
//!
//! // Track inventory
//! let mut mirror = InventoryMirror::new(store);
//! mirror.load()?;
//! let refresh = mirror.add("Widget", "5")?;
//! ```
//!
//! # Modules
//!
//! - `storage`: schema and record store (main persistence entry point)
//! - `inventory`: in-memory mirror and refresh signals
//! - `auth`: credential gate
//! - `models`: data structures for items and credentials
//! - `config`: application configuration

pub mod auth;
pub mod config;
pub mod inventory;
pub mod models;
pub mod storage;

pub use auth::CredentialGate;
pub use config::Config;
pub use inventory::{Field, InventoryError, InventoryMirror, Refresh};
pub use models::{Credential, Item};
pub use storage::{RecordStore, StoreError, SCHEMA_VERSION};
