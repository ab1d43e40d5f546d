//! Delete the store file outright.

use std::io;
use std::path::Path;

use tracing::{info, warn};

/// Delete the store file if it exists.
///
/// # Errors
///
/// Returns `io::Error` if the file exists but cannot be removed.
pub fn run(db_path: &Path) -> io::Result<()> {
    if db_path.exists() {
        std::fs::remove_file(db_path)?;
        info!(path = %db_path.display(), "Store file has been deleted");
    } else {
        warn!(path = %db_path.display(), "Store file does not exist");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "{}").unwrap();

        run(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("db.json")).is_ok());
    }
}
