//! Process-wide price-change log.
//!
//! Shared by every warehouse in the process and never cleared. Each entry keeps
//! the product as it was *before* the change.

use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockroom_core::ProductId;

use crate::product::Product;

static PRICE_CHANGES: LazyLock<Mutex<Vec<PriceChange>>> = LazyLock::new(Default::default);

/// One successful price update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    /// Snapshot taken before the update.
    pub previous: Product,
    pub new_price: Decimal,
    /// Name of the warehouse the product lives in.
    pub warehouse: String,
    pub recorded_at: DateTime<Utc>,
}

impl PriceChange {
    pub fn product_id(&self) -> ProductId {
        self.previous.id()
    }

    pub fn old_price(&self) -> Decimal {
        self.previous.price()
    }
}

pub(crate) fn record(change: PriceChange) {
    tracing::debug!(
        product_id = %change.product_id(),
        warehouse = %change.warehouse,
        old_price = %change.old_price(),
        new_price = %change.new_price,
        "price changed"
    );
    // Pushes leave the vec consistent, so a poisoned lock is still usable.
    PRICE_CHANGES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(change);
}

/// All recorded changes, oldest first.
pub fn entries() -> Vec<PriceChange> {
    PRICE_CHANGES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The pre-change snapshots, oldest first.
pub fn previous_snapshots() -> Vec<Product> {
    PRICE_CHANGES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|change| change.previous.clone())
        .collect()
}
