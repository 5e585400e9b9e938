//! Request payload parsing and validation for create/update calls.

use serde::Deserialize;

use crate::item::core::error::ItemError;
use crate::item::core::types::ItemFields;

/// Body of a create or update request, before validation.
///
/// Unknown keys (a client-supplied `id` included) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemPayload {
    /// Parse a raw request body.
    ///
    /// Anything other than a JSON object whose `name`/`description` are
    /// strings (or absent/null) is a validation failure.
    pub fn from_json(body: &[u8]) -> Result<Self, ItemError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|_| ItemError::Validation)?;
        if !value.is_object() {
            return Err(ItemError::Validation);
        }
        serde_json::from_value(value).map_err(|_| ItemError::Validation)
    }

    /// Require both fields to be present and non-empty.
    pub fn validate(self) -> Result<ItemFields, ItemError> {
        match (self.name, self.description) {
            (Some(name), Some(description)) => ItemFields::new(name, description),
            _ => Err(ItemError::Validation),
        }
    }
}
