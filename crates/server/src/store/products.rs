//! Products collection access.

use countertill_core::{AdminId, Product};

use super::{Store, StoreError};

/// Typed access to the products collection.
pub struct ProductRecords<'a> {
    store: &'a Store,
}

impl<'a> ProductRecords<'a> {
    pub(crate) const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Linear scan for every product whose `adminId` equals `admin_id`, in
    /// stored order. An empty result is not an error.
    #[must_use]
    pub fn find_all_for_admin(&self, admin_id: &AdminId) -> Vec<Product> {
        self.store.query(|data| {
            data.products
                .iter()
                .filter(|p| p.admin_id == *admin_id)
                .cloned()
                .collect()
        })
    }

    /// Remove every product whose `adminId` equals `admin_id` and persist
    /// the remainder. Returns the number of removed records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the rewrite fails.
    pub fn delete_for_admin(&self, admin_id: &AdminId) -> Result<usize, StoreError> {
        self.store.mutate(|data| {
            let before = data.products.len();
            data.products.retain(|p| p.admin_id != *admin_id);
            before - data.products.len()
        })
    }

    /// Append records in order and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the rewrite fails.
    pub fn insert_many(&self, records: Vec<Product>) -> Result<(), StoreError> {
        self.store.mutate(|data| data.products.extend(records))
    }
}
