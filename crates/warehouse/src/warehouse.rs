//! Warehouse aggregate: a named, insertion-ordered set of products.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;

use stockroom_core::{AggregateRoot, DomainError, DomainResult, ProductId};

use crate::audit::{self, PriceChange};
use crate::category::Category;
use crate::product::Product;
use crate::product_list::ProductList;
use crate::registry::{self, SharedWarehouse};

/// Aggregate root: Warehouse.
///
/// Lookups are linear scans; product ids are unique within one warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    name: String,
    products: Vec<Product>,
    version: u64,
}

impl Warehouse {
    /// A new warehouse with an empty name.
    pub fn get_instance() -> Self {
        Self::with_name("")
    }

    /// A new, unshared warehouse called `name`.
    ///
    /// Every call builds a fresh instance; use [`Warehouse::shared`] to get the
    /// single process-wide warehouse for a name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
            version: 0,
        }
    }

    /// The process-wide warehouse registered under `name`, created on first use.
    pub fn shared(name: impl Into<String>) -> SharedWarehouse {
        registry::shared(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Read-only snapshot of all products in insertion order.
    pub fn products(&self) -> ProductList {
        ProductList::from(self.products.clone())
    }

    /// Adds a product and returns the stored record.
    ///
    /// A missing id is generated and a missing price becomes zero. Name and
    /// category are required, and the id must not already be present.
    pub fn add_product<'a>(
        &mut self,
        id: impl Into<Option<ProductId>>,
        name: impl Into<Option<&'a str>>,
        category: impl Into<Option<&'a Category>>,
        price: impl Into<Option<Decimal>>,
    ) -> DomainResult<Product> {
        let name = match name.into() {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(DomainError::invalid_argument(
                    "Product name can't be null or empty.",
                ));
            }
        };
        let category = category
            .into()
            .ok_or_else(|| DomainError::invalid_argument("Category can't be null."))?;
        let id = id.into().unwrap_or_else(ProductId::new);
        let price = price.into().unwrap_or(Decimal::ZERO);

        if self.position_of(id).is_some() {
            return Err(DomainError::invalid_argument(
                "Product with that id already exists, use updateProduct for updates.",
            ));
        }

        let product = Product::new(id, name.to_string(), category.clone(), price);
        self.products.push(product.clone());
        self.version += 1;

        tracing::debug!(
            warehouse = %self.name,
            product_id = %id,
            category = %product.category(),
            %price,
            "product added"
        );

        Ok(product)
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id() == id).cloned()
    }

    /// Replaces the product's record with one carrying `new_price`.
    ///
    /// The record as it was before the change goes to the process-wide audit
    /// log. Returns the new record.
    pub fn update_product_price(&mut self, id: ProductId, new_price: Decimal) -> DomainResult<Product> {
        let index = self
            .position_of(id)
            .ok_or_else(|| DomainError::invalid_argument("Product with that id doesn't exist."))?;

        let updated = self.products[index].with_price(new_price);
        let previous = std::mem::replace(&mut self.products[index], updated.clone());
        self.version += 1;

        audit::record(PriceChange {
            previous,
            new_price,
            warehouse: self.name.clone(),
            recorded_at: Utc::now(),
        });

        Ok(updated)
    }

    /// Pre-change snapshots from every price update in the process, oldest first.
    pub fn changed_products() -> Vec<Product> {
        audit::previous_snapshots()
    }

    /// Full audit entries behind [`Warehouse::changed_products`].
    pub fn price_changes() -> Vec<PriceChange> {
        audit::entries()
    }

    /// Products bucketed by their category. Buckets keep insertion order and
    /// are never empty.
    pub fn products_grouped_by_category(&self) -> HashMap<Category, Vec<Product>> {
        let mut groups: HashMap<Category, Vec<Product>> = HashMap::new();
        for product in &self.products {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(product.clone());
        }
        groups
    }

    pub fn products_by(&self, category: &Category) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    fn position_of(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

impl AggregateRoot for Warehouse {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.version
    }
}
