//! Error type for item resource operations.

use std::fmt;

use thiserror::Error;

use crate::store::StoreError;

/// The store call an item operation was making when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Fetch,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOperation::Fetch => write!(f, "fetch"),
            StoreOperation::Insert => write!(f, "insert"),
            StoreOperation::Update => write!(f, "update"),
            StoreOperation::Delete => write!(f, "delete"),
        }
    }
}

/// Tagged failure of an item resource operation.
///
/// Every variant maps to exactly one HTTP status in the server layer.
#[derive(Error, Debug)]
pub enum ItemError {
    /// The payload lacked a non-empty `name` or `description`.
    #[error("Name and description are required")]
    Validation,

    /// No item matches the requested identifier.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The backing store failed.
    #[error("Failed to {operation} item: {source}")]
    Store {
        operation: StoreOperation,
        #[source]
        source: StoreError,
    },
}

impl ItemError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        ItemError::NotFound(id.into())
    }

    #[must_use]
    pub fn store(operation: StoreOperation, source: StoreError) -> Self {
        ItemError::Store { operation, source }
    }
}
