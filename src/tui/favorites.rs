//! # Favorites
//!
//! The set of landmarks the user has marked. It lives in the shell, not in
//! the navigation core: screens consult it to label themselves, nothing more.

use std::collections::HashSet;

use crate::core::catalog::{Catalog, Landmark, LandmarkId};

#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: HashSet<LandmarkId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership. Returns `true` if `id` is now a favorite.
    pub fn toggle(&mut self, id: LandmarkId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: LandmarkId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorites in catalog order.
    pub fn in_catalog<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Landmark> {
        catalog.iter().filter(|l| self.ids.contains(&l.id))
    }
}
