//! Item identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a stored item.
///
/// Assigned by the store when the item is created and never changed
/// afterwards. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// First identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one, or `None` once the id space is used up.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_id() {
        let id: ItemId = "42".parse().unwrap();
        assert_eq!(id, ItemId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("abc".parse::<ItemId>().is_err());
        assert!("".parse::<ItemId>().is_err());
        assert!("-1".parse::<ItemId>().is_err());
        assert!("1.5".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_next_stops_at_max() {
        assert_eq!(ItemId::FIRST.next(), Some(ItemId::new(2)));
        assert_eq!(ItemId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(back, ItemId::new(7));
    }
}
