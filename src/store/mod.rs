//! Persistence collaborators for items.
//!
//! The item resource only ever sees `Arc<dyn ItemStore>`; which backend sits
//! behind it is decided once at startup by [`build_store`].

mod memory;
mod postgrest;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::StoreSettings;
use crate::item::{Item, ItemFields, ItemId};

pub use memory::{demo_items, MemoryStore};
pub use postgrest::{PostgrestStore, DEFAULT_TABLE};

/// Failure reported by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend answered, but refused the request.
    #[error("{message}")]
    Rejected { message: String },

    /// The backend could not be reached or answered with something unreadable.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with rows that do not have the item shape.
    #[error("Unexpected row format: {0}")]
    Decode(#[source] serde_json::Error),

    /// The in-memory identifier counter has no values left.
    #[error("Identifier space exhausted")]
    IdSpaceExhausted,
}

impl StoreError {
    /// Whether this failure is outside what the backend contract anticipates:
    /// the backend could not be reached or its body could not be read.
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        matches!(self, StoreError::Http(_))
    }
}

/// Capability set the item resource needs from a backing store.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Assign an identifier, persist, and return the stored form.
    async fn insert(&self, fields: ItemFields) -> Result<Item, StoreError>;

    /// Every stored item in the backend's iteration order.
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Replace the fields of a stored item. `None` when no item matches.
    async fn update_by_id(&self, id: ItemId, fields: ItemFields)
        -> Result<Option<Item>, StoreError>;

    /// Remove a stored item. `false` when no item matched.
    async fn delete_by_id(&self, id: ItemId) -> Result<bool, StoreError>;
}

/// Build the store selected by `settings`.
pub fn build_store(settings: &StoreSettings) -> Result<Arc<dyn ItemStore>, StoreError> {
    match &settings.postgrest {
        Some(postgrest) => {
            if settings.seed {
                warn!("Seeding is only supported by the memory store; ignoring");
            }
            info!(
                url = %postgrest.url,
                table = %postgrest.table,
                "Using PostgREST item store"
            );
            let store = PostgrestStore::new(&postgrest.url, &postgrest.table, &postgrest.api_key)?;
            Ok(Arc::new(store))
        }
        None if settings.seed => {
            info!("Using in-memory item store with demo items");
            Ok(Arc::new(MemoryStore::with_items(demo_items())))
        }
        None => {
            info!("Using in-memory item store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PostgrestSettings;

    #[test]
    fn test_only_transport_errors_are_unexpected() {
        assert!(!StoreError::IdSpaceExhausted.is_unexpected());
        assert!(!StoreError::Rejected {
            message: "nope".to_string()
        }
        .is_unexpected());
        let decode = serde_json::from_str::<Vec<Item>>(r#"[{"id":"a"}]"#).unwrap_err();
        assert!(!StoreError::Decode(decode).is_unexpected());
    }

    #[tokio::test]
    async fn test_build_memory_store() {
        let store = build_store(&StoreSettings::default()).unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_seeded_memory_store() {
        let settings = StoreSettings {
            seed: true,
            postgrest: None,
        };
        let store = build_store(&settings).unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 3);
    }

    #[test]
    fn test_build_postgrest_store() {
        let settings = StoreSettings {
            seed: false,
            postgrest: Some(PostgrestSettings {
                url: "http://127.0.0.1:54321".to_string(),
                table: DEFAULT_TABLE.to_string(),
                api_key: "secret".to_string(),
            }),
        };
        assert!(build_store(&settings).is_ok());
    }
}
