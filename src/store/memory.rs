//! Process-local item store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ItemStore, StoreError};
use crate::item::{Item, ItemFields, ItemId};

/// Demo records loaded by `--seed`.
const DEMO_ITEMS: [(u64, &str, &str); 3] = [
    (1, "Buku", "Buku pelajaran sejarah"),
    (2, "Pensil", "Pensil 2B"),
    (3, "Penghapus", "Penghapus warna putih"),
];

/// The demo records as stored items.
#[must_use]
pub fn demo_items() -> Vec<Item> {
    DEMO_ITEMS
        .iter()
        .map(|&(id, name, description)| Item {
            id: ItemId::new(id),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

struct MemoryState {
    items: BTreeMap<ItemId, Item>,
    /// `None` once every identifier has been handed out.
    next_id: Option<ItemId>,
}

/// Ordered in-memory store with a monotonically increasing id counter.
///
/// Identifiers are only ever handed out upwards, so key order equals
/// insertion order and deleted ids are never reused. A single async mutex
/// guards both the map and the counter.
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Start with `items` already stored; new ids continue after the largest one.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = match items.iter().map(|item| item.id).max() {
            Some(max) => max.next(),
            None => Some(ItemId::FIRST),
        };
        let items = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            state: Mutex::new(MemoryState { items, next_id }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn insert(&self, fields: ItemFields) -> Result<Item, StoreError> {
        let mut state = self.state.lock().await;
        let id = state.next_id.ok_or(StoreError::IdSpaceExhausted)?;
        state.next_id = id.next();
        let item = Item::new(id, fields);
        state.items.insert(id, item.clone());
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.items.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.items.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ItemId,
        fields: ItemFields,
    ) -> Result<Option<Item>, StoreError> {
        let mut state = self.state.lock().await;
        Ok(state.items.get_mut(&id).map(|item| {
            item.replace_fields(fields);
            item.clone()
        }))
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool, StoreError> {
        let mut state = self.state.lock().await;
        Ok(state.items.remove(&id).is_some())
    }
}
