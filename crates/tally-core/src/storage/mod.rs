//! Storage layer
//!
//! Schema management and durable CRUD over the inventory database.
//! Every operation acquires its own connection and releases it before
//! returning; there is no session state and no multi-statement
//! transaction.

pub mod error;
pub mod record;
pub mod schema;

pub use error::{StoreError, StoreResult};
pub use record::RecordStore;
pub use schema::{ensure_schema, init_schema, upgrade_schema, SCHEMA_VERSION};
