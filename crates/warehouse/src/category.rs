//! Interned product categories.
//!
//! `Category::of` is the only way to obtain a category. Every call with a name
//! that normalizes to the same string hands back a clone of one canonical
//! handle, kept in a process-wide table for the lifetime of the process.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use stockroom_core::{DomainError, DomainResult, ValueObject};

static CATEGORIES: LazyLock<Mutex<HashMap<String, Category>>> = LazyLock::new(Default::default);

/// A named product category.
///
/// Equality and hashing use the normalized name, so categories work as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    /// Returns the canonical category for `name`.
    ///
    /// The first character is upper-cased; the rest is kept as given.
    /// `None` and the empty string are rejected.
    pub fn of<'a>(name: impl Into<Option<&'a str>>) -> DomainResult<Self> {
        let name = name
            .into()
            .ok_or_else(|| DomainError::invalid_argument("Category name can't be null"))?;
        let normalized = normalize(name)
            .ok_or_else(|| DomainError::invalid_argument("Category name can't be empty"))?;

        // Inserts leave the map consistent, so a poisoned lock is still usable.
        let mut table = CATEGORIES.lock().unwrap_or_else(PoisonError::into_inner);
        let category = table.entry(normalized).or_insert_with_key(|key| {
            tracing::debug!(category = %key, "interned category");
            Category {
                name: Arc::from(key.as_str()),
            }
        });

        Ok(category.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether both handles point at the same interned instance.
    pub fn ptr_eq(a: &Category, b: &Category) -> bool {
        Arc::ptr_eq(&a.name, &b.name)
    }
}

fn normalize(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Category::of(name.as_str()).map_err(serde::de::Error::custom)
    }
}
