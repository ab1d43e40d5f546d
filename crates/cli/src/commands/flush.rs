//! Flush the store: remove every record, keep the file.

use std::path::Path;

use countertill_server::store::{Store, StoreError};
use tracing::info;

/// Remove all records from every collection, preserving the file and the
/// collection names.
///
/// # Errors
///
/// Returns `StoreError` if the file cannot be read, parsed, or rewritten.
pub fn run(db_path: &Path) -> Result<(), StoreError> {
    let store = Store::open(db_path)?;
    store.truncate_all()?;
    info!(path = %db_path.display(), "All data has been flushed from all collections");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_empties_collections_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(
            &path,
            r#"{"admins": [{"username": "admin1", "passwordHash": "h", "adminId": "admin1"}], "products": [], "transactions": []}"#,
        )
        .unwrap();

        run(&path).unwrap();

        assert!(path.exists());
        let store = Store::open(&path).unwrap();
        assert!(store.admins().is_empty());
    }
}
