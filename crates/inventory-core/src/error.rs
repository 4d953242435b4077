//! Error types for inventory core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to the console messages users see.

use thiserror::Error;

/// Result type alias for inventory operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Core error type for inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Item or file not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid caller-supplied value (negative quantity, overflow)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File content is not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// File content is JSON but not an item -> quantity object
    #[error("Validation error: {0}")]
    Validation(String),

    /// Filesystem error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl InventoryError {
    /// The message without the category prefix, for console reporting.
    pub fn detail(&self) -> &str {
        match self {
            InventoryError::NotFound(msg)
            | InventoryError::InvalidInput(msg)
            | InventoryError::Parse(msg)
            | InventoryError::Validation(msg)
            | InventoryError::Storage(msg) => msg,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Parse(err.to_string())
    }
}
