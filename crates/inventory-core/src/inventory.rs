//! The in-memory inventory store.
//!
//! `Inventory` maps item names to quantities. Items keep the order in which
//! they were first stocked, and a stored quantity is always greater than zero:
//! removing down to zero deletes the item.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::activity::ActivityLog;
use crate::error::{InventoryError, Result};

/// Threshold used by `low_stock` when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Result of a successful `remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The item is still stocked with this quantity
    Remaining(u64),
    /// The quantity reached zero and the item was deleted
    Depleted,
}

/// Item name -> quantity store, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: IndexMap<String, u64>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(item, quantity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Add `qty` units of `item`, creating the item if needed.
    ///
    /// When `log` is supplied an "Added <qty> of <item>" record is appended.
    /// Adding zero of an unknown item is accepted but stores nothing.
    ///
    /// # Returns
    ///
    /// The item's quantity after the addition.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InvalidInput` if `qty` is negative or the
    /// new quantity would overflow. The inventory is left unchanged.
    pub fn add(&mut self, item: &str, qty: i64, log: Option<&mut ActivityLog>) -> Result<u64> {
        let amount = u64::try_from(qty).map_err(|_| {
            warn!(item, qty, "rejected negative addition");
            InventoryError::InvalidInput(format!(
                "Invalid quantity: {} (cannot add negative numbers)",
                qty
            ))
        })?;

        let total = match self.items.get_mut(item) {
            Some(slot) => {
                *slot = slot.checked_add(amount).ok_or_else(|| {
                    InventoryError::InvalidInput(format!(
                        "Adding {} of '{}' overflows its quantity",
                        amount, item
                    ))
                })?;
                *slot
            }
            None => {
                if amount > 0 {
                    self.items.insert(item.to_string(), amount);
                }
                amount
            }
        };

        debug!(item, added = amount, total, "stock added");
        if let Some(log) = log {
            log.record(format!("Added {} of {}", amount, item));
        }
        Ok(total)
    }

    /// Remove `qty` units of `item`. The item is deleted once its quantity
    /// reaches zero.
    ///
    /// # Errors
    ///
    /// - `InventoryError::NotFound` if the item is not stocked
    /// - `InventoryError::InvalidInput` if `qty` is negative
    ///
    /// The inventory is unchanged on error.
    pub fn remove(&mut self, item: &str, qty: i64) -> Result<RemoveOutcome> {
        let current = self.items.get(item).copied().ok_or_else(|| {
            InventoryError::NotFound(format!("Item '{}' not found in inventory.", item))
        })?;
        let amount = u64::try_from(qty).map_err(|_| {
            warn!(item, qty, "rejected negative removal");
            InventoryError::InvalidInput(format!(
                "Invalid quantity for item '{}': {} (cannot remove negative numbers)",
                item, qty
            ))
        })?;

        if amount >= current {
            self.items.shift_remove(item);
            debug!(item, removed = amount, "stock depleted");
            return Ok(RemoveOutcome::Depleted);
        }

        let remaining = current - amount;
        if let Some(slot) = self.items.get_mut(item) {
            *slot = remaining;
        }
        debug!(item, removed = amount, remaining, "stock removed");
        Ok(RemoveOutcome::Remaining(remaining))
    }

    /// Quantity stocked for `item`, or `None` if it is not stocked.
    pub fn get_qty(&self, item: &str) -> Option<u64> {
        self.items.get(item).copied()
    }

    /// Quantity stocked for `item`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` if the item is not stocked.
    pub fn require_qty(&self, item: &str) -> Result<u64> {
        self.get_qty(item).ok_or_else(|| {
            InventoryError::NotFound(format!("Item '{}' not found in inventory.", item))
        })
    }

    /// One "<item> -> <quantity>" line per item, in insertion order.
    pub fn report_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(item, qty)| format!("{} -> {}", item, qty))
            .collect()
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: u64) -> Vec<&str> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item)
            .collect()
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the whole mapping. Zero quantities are dropped; a repeated
    /// name keeps its first position and its last non-zero quantity.
    pub(crate) fn replace_with(&mut self, items: impl IntoIterator<Item = (String, u64)>) {
        self.items = items.into_iter().filter(|(_, qty)| *qty > 0).collect();
    }
}

impl FromIterator<(String, u64)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        inventory.replace_with(iter);
        inventory
    }
}
