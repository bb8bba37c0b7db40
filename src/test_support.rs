//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, LandmarkId};
use crate::core::navigator::Navigator;
use crate::core::store::MemoryStateStore;

/// Creates a Navigator over the sample catalog with a fresh in-memory store.
pub fn test_navigator() -> Navigator {
    test_navigator_with_store(MemoryStateStore::new())
}

/// Creates a Navigator whose store is shared with `store` (clones share slots).
pub fn test_navigator_with_store(store: MemoryStateStore) -> Navigator {
    Navigator::new(Catalog::sample(), Box::new(store))
}

/// Id of the sample landmark with the given name.
pub fn landmark_id(name: &str) -> LandmarkId {
    Catalog::sample()
        .iter()
        .find(|l| l.name == name)
        .map(|l| l.id)
        .unwrap_or_else(|| panic!("no sample landmark named {name}"))
}
