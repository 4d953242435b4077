//! JSON file persistence for `Inventory`.
//!
//! The file is a bare JSON object mapping item names to integer quantities:
//!
//! ```json
//! {
//!     "apple": 7,
//!     "pear": 2
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{InventoryError, Result};
use crate::fs::write_atomic;
use crate::inventory::Inventory;

const INDENT: &[u8] = b"    ";

impl Inventory {
    /// Replace the whole inventory with the contents of `path`.
    ///
    /// # Returns
    ///
    /// The number of items loaded.
    ///
    /// # Errors
    ///
    /// - `InventoryError::NotFound` if the file does not exist
    /// - `InventoryError::Parse` if the file is not valid JSON
    /// - `InventoryError::Validation` if it is not an object of non-negative integers
    /// - `InventoryError::Storage` for other read failures
    ///
    /// On any error the inventory is left empty.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        match read_inventory_file(path) {
            Ok(items) => {
                self.replace_with(items);
                debug!(path = %path.display(), items = self.len(), "inventory loaded");
                Ok(self.len())
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "inventory reset to empty");
                self.clear();
                Err(err)
            }
        }
    }

    /// Write the inventory to `path` as a 4-space indented JSON object.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Storage` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = to_pretty_json(self)?;
        write_atomic(path, &bytes)?;
        debug!(path = %path.display(), items = self.len(), "inventory saved");
        Ok(())
    }
}

/// Read and validate an inventory file into ordered `(item, quantity)` pairs.
pub fn read_inventory_file(path: &Path) -> Result<Vec<(String, u64)>> {
    let contents = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            InventoryError::NotFound(format!("File '{}' not found", path.display()))
        } else {
            InventoryError::Storage(format!("Failed to read {}: {}", path.display(), err))
        }
    })?;
    parse_inventory(&contents)
}

/// Parse inventory JSON text into ordered `(item, quantity)` pairs.
pub fn parse_inventory(contents: &str) -> Result<Vec<(String, u64)>> {
    let value: Value = serde_json::from_str(contents)?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(InventoryError::Validation(format!(
                "expected a JSON object of item quantities, found {}",
                json_kind(&other)
            )))
        }
    };

    map.into_iter()
        .map(|(item, qty)| match qty.as_u64() {
            Some(qty) => Ok((item, qty)),
            None => Err(InventoryError::Validation(format!(
                "quantity for '{}' must be a non-negative integer, found {}",
                item, qty
            ))),
        })
        .collect()
}

/// Serialize the inventory as 4-space indented JSON.
pub fn to_pretty_json(inventory: &Inventory) -> Result<Vec<u8>> {
    let map: Map<String, Value> = inventory
        .iter()
        .map(|(item, qty)| (item.to_string(), Value::from(qty)))
        .collect();

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    map.serialize(&mut serializer)?;
    Ok(buf)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
