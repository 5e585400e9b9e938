//! The item resource: validates requests and drives the store.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::item::core::error::{ItemError, StoreOperation};
use crate::item::core::id::ItemId;
use crate::item::core::types::Item;
use crate::item::validation::ItemPayload;
use crate::store::{ItemStore, StoreError};

/// CRUD operations over the `items` collection.
///
/// Each call validates first, then performs a single check against the
/// store followed by at most one mutation. Cloning is cheap; clones share
/// the same store.
#[derive(Clone)]
pub struct ItemResource {
    store: Arc<dyn ItemStore>,
}

impl ItemResource {
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Validate `payload` and persist it as a new item.
    pub async fn create(&self, payload: ItemPayload) -> Result<Item, ItemError> {
        let fields = payload.validate()?;
        let item = self
            .store
            .insert(fields)
            .await
            .map_err(|e| store_failure(StoreOperation::Insert, e))?;
        info!(item.id = %item.id, "Item created");
        Ok(item)
    }

    /// Every item, in store iteration order.
    pub async fn list(&self) -> Result<Vec<Item>, ItemError> {
        let items = self
            .store
            .list_all()
            .await
            .map_err(|e| store_failure(StoreOperation::Fetch, e))?;
        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Item, ItemError> {
        let id = parse_id(raw_id)?;
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| store_failure(StoreOperation::Fetch, e))?
            .ok_or_else(|| ItemError::not_found(raw_id))
    }

    /// Replace `name`/`description` of an existing item.
    ///
    /// The payload is validated before the identifier is looked at, so an
    /// incomplete payload is rejected whether or not the item exists.
    pub async fn update(&self, raw_id: &str, payload: ItemPayload) -> Result<Item, ItemError> {
        let fields = payload.validate()?;
        let id = parse_id(raw_id)?;
        let item = self
            .store
            .update_by_id(id, fields)
            .await
            .map_err(|e| store_failure(StoreOperation::Update, e))?
            .ok_or_else(|| ItemError::not_found(raw_id))?;
        info!(item.id = %item.id, "Item updated");
        Ok(item)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), ItemError> {
        let id = parse_id(raw_id)?;
        let removed = self
            .store
            .delete_by_id(id)
            .await
            .map_err(|e| store_failure(StoreOperation::Delete, e))?;
        if !removed {
            return Err(ItemError::not_found(raw_id));
        }
        info!(item.id = %id, "Item deleted");
        Ok(())
    }
}

/// Identifiers that are not valid numbers can never match a stored item.
fn parse_id(raw_id: &str) -> Result<ItemId, ItemError> {
    raw_id.parse().map_err(|_| ItemError::not_found(raw_id))
}

fn store_failure(operation: StoreOperation, source: StoreError) -> ItemError {
    error!(%operation, error = %source, "Store operation failed");
    ItemError::store(operation, source)
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod resource_tests;
