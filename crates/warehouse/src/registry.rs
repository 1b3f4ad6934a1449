//! Process-wide warehouses keyed by name.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError, RwLock};

use crate::warehouse::Warehouse;

/// Handle to a warehouse shared through the registry.
pub type SharedWarehouse = Arc<RwLock<Warehouse>>;

static WAREHOUSES: LazyLock<Mutex<HashMap<String, SharedWarehouse>>> =
    LazyLock::new(Default::default);

/// The warehouse registered under `name`, created empty on first request.
pub fn shared(name: impl Into<String>) -> SharedWarehouse {
    let name = name.into();
    let mut table = WAREHOUSES.lock().unwrap_or_else(PoisonError::into_inner);
    let handle = table.entry(name).or_insert_with_key(|key| {
        tracing::debug!(warehouse = %key, "registered shared warehouse");
        Arc::new(RwLock::new(Warehouse::with_name(key.as_str())))
    });
    Arc::clone(handle)
}

/// Names of all registered warehouses, sorted.
pub fn registered_names() -> Vec<String> {
    let table = WAREHOUSES.lock().unwrap_or_else(PoisonError::into_inner);
    let mut names: Vec<String> = table.keys().cloned().collect();
    names.sort();
    names
}
