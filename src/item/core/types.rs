//! The item record and its validated field set.

use serde::{Deserialize, Serialize};

use super::error::ItemError;
use super::id::ItemId;

/// A stored inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Build the stored form of `fields` under the store-assigned `id`.
    #[must_use]
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
        }
    }

    /// Replace `name` and `description`, leaving `id` untouched.
    pub fn replace_fields(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.description = fields.description;
    }
}

/// A `name`/`description` pair that passed validation.
///
/// Both fields are guaranteed non-empty; this is the only shape the store
/// accepts for inserts and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFields {
    name: String,
    description: String,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, ItemError> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() || description.is_empty() {
            return Err(ItemError::Validation);
        }
        Ok(Self { name, description })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
