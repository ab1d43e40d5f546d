//! Admins collection access.

use countertill_core::Admin;

use super::{Store, StoreError};

/// Typed access to the admins collection.
pub struct AdminRecords<'a> {
    store: &'a Store,
}

impl<'a> AdminRecords<'a> {
    pub(crate) const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Whether the collection holds no records. The seed checks this to stay
    /// idempotent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.query(|data| data.admins.is_empty())
    }

    /// Linear scan for the first admin whose username equals `username`.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<Admin> {
        self.store
            .query(|data| data.admins.iter().find(|a| a.username == username).cloned())
    }

    /// All admin records, in stored order.
    #[must_use]
    pub fn all(&self) -> Vec<Admin> {
        self.store.query(|data| data.admins.clone())
    }

    /// Append records in order and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the rewrite fails.
    pub fn insert_many(&self, records: Vec<Admin>) -> Result<(), StoreError> {
        self.store.mutate(|data| data.admins.extend(records))
    }
}
