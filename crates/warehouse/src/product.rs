//! Immutable product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId};

use crate::category::Category;

/// Snapshot of a product: id, name, category and price.
///
/// Records are never mutated. A price change produces a new record and the
/// old one stays valid wherever it is held (callers, the audit log).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: String, category: Category, price: Decimal) -> Self {
        Self {
            id,
            name,
            category,
            price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// A copy of this record carrying `price`.
    pub fn with_price(&self, price: Decimal) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
