//! Inventory mirror
//!
//! Keeps an ordered in-memory copy of the `items` table and drives
//! display refreshes. The record store is the source of truth for
//! durability; the mirror is the source of truth for display. The
//! presentation layer never reads the store directly.
//!
//! After every completed operation the mirror holds exactly the rows
//! `list_items()` would return, in ascending-id order. `add` guarantees
//! this with a full reload; `remove_at` and `edit_at` patch the
//! sequence in place without a re-fetch.

use thiserror::Error;

use crate::models::Item;
use crate::storage::{RecordStore, StoreError};

/// Display-invalidation signal consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// All positions may have changed; redraw the whole list
    All,
    /// The entry at this position was removed
    Removed(usize),
    /// The entry at this position changed in place
    Changed(usize),
}

/// Input field an error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
}

/// Errors reported by mirror operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Item name is empty after trimming
    #[error("item name is required")]
    EmptyName,

    /// Quantity input is not a non-negative whole number
    #[error("quantity must be a non-negative whole number")]
    InvalidQuantity,

    /// Position outside `[0, len)`
    #[error("position {position} is out of bounds (list has {len} items)")]
    OutOfBounds { position: usize, len: usize },

    /// Store-level fault, propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl InventoryError {
    /// The input field a validation error is attached to, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            InventoryError::EmptyName => Some(Field::Name),
            InventoryError::InvalidQuantity => Some(Field::Quantity),
            _ => None,
        }
    }
}

/// Ordered in-memory copy of the inventory, synchronized with the store
pub struct InventoryMirror {
    store: RecordStore,
    items: Vec<Item>,
}

impl InventoryMirror {
    /// Create an empty mirror over the given store
    ///
    /// Call [`load`](Self::load) before reading positions.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            items: Vec::new(),
        }
    }

    /// Current sequence, in ascending-id order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at a position, if in bounds
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the entire sequence with the store's current rows
    pub fn load(&mut self) -> Result<Refresh, InventoryError> {
        self.items = self.store.list_items()?;
        Ok(Refresh::All)
    }

    /// Validate and insert a new item, then reload the full sequence
    ///
    /// The full reload (rather than an incremental insert) is the
    /// contract: the signal is `Refresh::All`, never a single position.
    pub fn add(&mut self, name: &str, quantity: &str) -> Result<Refresh, InventoryError> {
        let name = validate_name(name)?;
        let quantity = validate_quantity(quantity)?;

        self.store.insert_item(&name, quantity)?;
        self.items = self.store.list_items()?;
        Ok(Refresh::All)
    }

    /// Delete the item at a position and drop it from the sequence
    ///
    /// Incremental: only the removed position is invalidated.
    pub fn remove_at(&mut self, position: usize) -> Result<Refresh, InventoryError> {
        if position >= self.items.len() {
            return Err(InventoryError::OutOfBounds {
                position,
                len: self.items.len(),
            });
        }

        let id = self.items[position].id;
        self.store.delete_item(id)?;
        self.items.remove(position);
        Ok(Refresh::Removed(position))
    }

    /// Validate and overwrite the item at a position, keeping its id
    pub fn edit_at(
        &mut self,
        position: usize,
        name: &str,
        quantity: &str,
    ) -> Result<Refresh, InventoryError> {
        let name = validate_name(name)?;
        let quantity = validate_quantity(quantity)?;

        if position >= self.items.len() {
            return Err(InventoryError::OutOfBounds {
                position,
                len: self.items.len(),
            });
        }

        let id = self.items[position].id;
        self.store.update_item(id, &name, quantity)?;
        self.items[position] = Item::new(id, name, quantity);
        Ok(Refresh::Changed(position))
    }
}

fn validate_name(input: &str) -> Result<String, InventoryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_quantity(input: &str) -> Result<i64, InventoryError> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|q| *q >= 0)
        .ok_or(InventoryError::InvalidQuantity)
}
