//! Item command handlers
//!
//! Every mutation goes through the inventory mirror, never straight to
//! the store, and renders whatever the returned refresh signal asks
//! for: the full list or a single position.

use anyhow::Result;

use tally_core::{Field, InventoryError, InventoryMirror, Refresh};

use crate::output::Output;

/// Add a new item
pub fn add(mirror: &mut InventoryMirror, name: &str, quantity: &str, output: &Output) -> Result<()> {
    let refresh = mirror.add(name, quantity).map_err(with_field)?;

    output.success("Item added");
    render(mirror, refresh, output);
    Ok(())
}

/// List all items
pub fn list(mirror: &InventoryMirror, output: &Output) -> Result<()> {
    output.print_items(mirror.items());
    Ok(())
}

/// Edit the item at a list position
pub fn edit(
    mirror: &mut InventoryMirror,
    position: usize,
    name: &str,
    quantity: &str,
    output: &Output,
) -> Result<()> {
    let refresh = mirror.edit_at(position, name, quantity).map_err(with_field)?;

    output.success("Item updated");
    render(mirror, refresh, output);
    Ok(())
}

/// Remove the item at a list position
pub fn remove(mirror: &mut InventoryMirror, position: usize, output: &Output) -> Result<()> {
    let refresh = mirror.remove_at(position).map_err(with_field)?;

    output.success("Item removed");
    render(mirror, refresh, output);
    Ok(())
}

/// Redraw what the refresh signal invalidated
fn render(mirror: &InventoryMirror, refresh: Refresh, output: &Output) {
    match refresh {
        Refresh::All => output.print_items(mirror.items()),
        Refresh::Changed(position) => output.print_item_row(position, &mirror.items()[position]),
        Refresh::Removed(position) => {
            output.message(&format!("Position {} removed", position));
        }
    }
}

/// Attach the offending field name to validation errors
fn with_field(err: InventoryError) -> anyhow::Error {
    match err.field() {
        Some(Field::Name) => anyhow::anyhow!("name: {err}"),
        Some(Field::Quantity) => anyhow::anyhow!("quantity: {err}"),
        None => err.into(),
    }
}
