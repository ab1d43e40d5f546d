//! Flat-file document store.
//!
//! One JSON file holds three named collections, each an ordered array of
//! records:
//!
//! ```json
//! {
//!   "admins": [...],
//!   "products": [...],
//!   "transactions": [...]
//! }
//! ```
//!
//! The whole document is loaded into memory at [`Store::open`] and rewritten
//! to disk on every mutating operation. Queries are linear scans; empty
//! results are not errors. The rewrite goes through a temp file and an atomic
//! rename, so the file on disk always holds either the old or the new full
//! content, never a partial record.
//!
//! There is no cross-process locking; a single process is assumed to own the
//! file. Concurrent requests within the process serialize on the in-memory
//! mutex per operation, but multi-operation sequences (delete-then-insert)
//! still interleave; see the catalog replace handler.

pub mod admins;
pub mod products;
pub mod transactions;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use countertill_core::{Admin, Product, Transaction};

use admins::AdminRecords;
use products::ProductRecords;
use transactions::TransactionRecords;

/// Errors raised by the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but does not parse as a store document.
    #[error("store file is corrupt: {0}")]
    Corrupt(serde_json::Error),

    /// Serializing the in-memory collections failed.
    #[error("store serialization error: {0}")]
    Serialize(serde_json::Error),
}

/// The three collections, exactly as serialized to disk.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct StoreData {
    pub(crate) admins: Vec<Admin>,
    pub(crate) products: Vec<Product>,
    pub(crate) transactions: Vec<Transaction>,
}

/// Flat-file document store over a single JSON file.
///
/// The store exclusively owns all persisted state. Handlers access the
/// collections through the typed record accessors: [`Store::admins`],
/// [`Store::products`], and [`Store::transactions`].
pub struct Store {
    path: PathBuf,
    data: Mutex<StoreData>,
}

impl Store {
    /// Open the store file, loading all collections into memory.
    ///
    /// A missing file starts the store empty; the file is created on the
    /// first persist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read, or
    /// `StoreError::Corrupt` if it does not parse.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(StoreError::Corrupt)?
        } else {
            StoreData::default()
        };

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Access the admins collection.
    #[must_use]
    pub const fn admins(&self) -> AdminRecords<'_> {
        AdminRecords::new(self)
    }

    /// Access the products collection.
    #[must_use]
    pub const fn products(&self) -> ProductRecords<'_> {
        ProductRecords::new(self)
    }

    /// Access the transactions collection.
    #[must_use]
    pub const fn transactions(&self) -> TransactionRecords<'_> {
        TransactionRecords::new(self)
    }

    /// Remove every record from every collection, preserving the file and
    /// the collection names.
    ///
    /// Used only by the offline maintenance CLI; not reachable from the API.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the emptied document cannot be persisted.
    pub fn truncate_all(&self) -> Result<(), StoreError> {
        self.mutate(|data| {
            data.admins.clear();
            data.products.clear();
            data.transactions.clear();
        })
    }

    /// Run a read-only closure against the collections.
    pub(crate) fn query<R>(&self, f: impl FnOnce(&StoreData) -> R) -> R {
        f(&self.lock())
    }

    /// Run a mutating closure against the collections, then rewrite the file.
    ///
    /// The closure's changes are kept in memory even if the persist fails;
    /// the caller sees the I/O error and the disk keeps its previous content.
    pub(crate) fn mutate<R>(&self, f: impl FnOnce(&mut StoreData) -> R) -> Result<R, StoreError> {
        let mut data = self.lock();
        let out = f(&mut data);
        self.persist(&data)?;
        Ok(out)
    }

    /// Rewrite the full document: serialize, write a temp file alongside the
    /// target, rename over it.
    fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(data).map_err(StoreError::Serialize)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, StoreData> {
        // A poisoned lock only means another handler panicked mid-read; the
        // data itself is still the last consistent state.
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
