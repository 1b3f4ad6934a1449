//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a product (128-bit UUID).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ProductId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_argument(format!("invalid product id: {e}")))?;
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_canonical_form() {
        let id: ProductId = "5fc03087-d265-11e7-b8c6-83e29cd24f4c".parse().unwrap();
        assert_eq!(id.to_string(), "5fc03087-d265-11e7-b8c6-83e29cd24f4c");
    }

    #[test]
    fn rejects_malformed_input() {
        let err = "not-a-uuid".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(msg) if msg.starts_with("invalid product id")));
    }

    #[test]
    fn new_ids_are_distinct() {
        assert_ne!(ProductId::new(), ProductId::new());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: ProductId = "9e120341-627f-32be-8393-58b5d655b751".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"9e120341-627f-32be-8393-58b5d655b751\"");
    }
}
