//! Read-only product snapshots handed out by a warehouse.

use std::ops::Deref;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use stockroom_core::{DomainError, DomainResult};

use crate::product::Product;

/// Immutable, insertion-ordered list of products.
///
/// Reads go through `Deref<Target = [Product]>`. The mutators exist only to
/// fail: a snapshot never changes after it is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductList {
    items: Arc<[Product]>,
}

impl ProductList {
    pub fn push(&mut self, _product: Product) -> DomainResult<()> {
        Err(Self::read_only("push"))
    }

    pub fn remove(&mut self, _index: usize) -> DomainResult<Product> {
        Err(Self::read_only("remove"))
    }

    pub fn clear(&mut self) -> DomainResult<()> {
        Err(Self::read_only("clear"))
    }

    fn read_only(op: &str) -> DomainError {
        DomainError::unsupported(format!("{op} on a read-only product list"))
    }
}

impl From<Vec<Product>> for ProductList {
    fn from(items: Vec<Product>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl Deref for ProductList {
    type Target = [Product];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ProductList {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl PartialEq<Vec<Product>> for ProductList {
    fn eq(&self, other: &Vec<Product>) -> bool {
        self.items[..] == other[..]
    }
}

impl PartialEq<[Product]> for ProductList {
    fn eq(&self, other: &[Product]) -> bool {
        self.items[..] == *other
    }
}

impl Serialize for ProductList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
