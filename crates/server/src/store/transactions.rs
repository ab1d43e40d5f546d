//! Transactions collection access.

use countertill_core::{AdminId, Transaction};

use super::{Store, StoreError};

/// Typed access to the transactions collection.
///
/// Transactions are append-only; there is no update or delete path.
pub struct TransactionRecords<'a> {
    store: &'a Store,
}

impl<'a> TransactionRecords<'a> {
    pub(crate) const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Linear scan for every transaction whose `adminId` equals `admin_id`,
    /// in stored order.
    #[must_use]
    pub fn find_all_for_admin(&self, admin_id: &AdminId) -> Vec<Transaction> {
        self.store.query(|data| {
            data.transactions
                .iter()
                .filter(|t| t.admin_id == *admin_id)
                .cloned()
                .collect()
        })
    }

    /// Append one record and persist. Never deduplicates.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the rewrite fails.
    pub fn insert(&self, record: Transaction) -> Result<(), StoreError> {
        self.store.mutate(|data| data.transactions.push(record))
    }

    /// Append records in order and persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the rewrite fails.
    pub fn insert_many(&self, records: Vec<Transaction>) -> Result<(), StoreError> {
        self.store.mutate(|data| data.transactions.extend(records))
    }
}
