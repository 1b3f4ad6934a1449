//! Warehouse domain module.
//!
//! In-memory product inventory: interned categories, immutable product
//! records, the warehouse aggregate and the process-wide price-change log.
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod audit;
pub mod category;
pub mod product;
pub mod product_list;
pub mod registry;
pub mod warehouse;

pub use audit::PriceChange;
pub use category::Category;
pub use product::Product;
pub use product_list::ProductList;
pub use registry::SharedWarehouse;
pub use warehouse::Warehouse;

pub use rust_decimal::Decimal;
pub use stockroom_core::{DomainError, DomainResult, ProductId};
