//! # Inventory Core
//!
//! Core library for Inventory - a small stock tracker that maps item names to
//! quantities and persists them as a plain JSON file.
//!
//! This crate provides the store, the activity log and file persistence,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **inventory**: The in-memory store and its stock operations
//! - **activity**: Timestamped record of accepted additions
//! - **persist**: JSON file load/save
//! - **fs**: Atomic file replacement helpers

pub mod activity;
pub mod error;
pub mod fs;
pub mod inventory;
pub mod persist;

pub use activity::{ActivityLog, LogEntry};
pub use error::{InventoryError, Result};
pub use inventory::{Inventory, RemoveOutcome, DEFAULT_LOW_STOCK_THRESHOLD};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
