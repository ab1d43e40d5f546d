//! First-run seeding.
//!
//! Populates the store with two admin accounts and, for each, two sample
//! products and two sample transactions. Runs once at process start before
//! any request is served; a store that already has any admin record is left
//! untouched, so seeding is idempotent.
//!
//! This is a fixture for first-run usability, not a general data-loading
//! mechanism.

use thiserror::Error;

use countertill_core::{Admin, AdminId, Product, ProductId, Transaction, TransactionId};

use crate::services::auth::{self, AuthError};
use crate::store::{Store, StoreError};

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Seed the store with default admin data and sample records if the admins
/// collection is empty.
///
/// # Errors
///
/// Returns `SeedError` if password hashing or a store write fails.
pub fn run(store: &Store) -> Result<(), SeedError> {
    if !store.admins().is_empty() {
        tracing::debug!("Store already seeded, skipping");
        return Ok(());
    }

    tracing::debug!("Initializing store with default admin data and sample records");

    store.admins().insert_many(vec![
        Admin {
            username: "admin1".to_string(),
            password_hash: auth::hash_password("password1")?,
            admin_id: AdminId::new("admin1"),
        },
        Admin {
            username: "admin2".to_string(),
            password_hash: auth::hash_password("password2")?,
            admin_id: AdminId::new("admin2"),
        },
    ])?;

    let p1 = product(1, "Dummy Product 1", 10.0, "A dummy product", "123456", 100, "admin1");
    let p2 = product(2, "Dummy Product 2", 20.0, "Another dummy product", "654321", 200, "admin1");
    let p3 = product(3, "Admin2 Product 1", 15.0, "Admin2's first product", "111222", 150, "admin2");
    let p4 = product(4, "Admin2 Product 2", 25.0, "Admin2's second product", "333444", 250, "admin2");

    store.products().insert_many(vec![p1.clone(), p2.clone()])?;
    store.products().insert_many(vec![p3.clone(), p4.clone()])?;

    // Each sample transaction snapshots one of the just-inserted products;
    // the total equals that product's price.
    store.transactions().insert_many(vec![
        transaction(1, "John Doe", vec![p1], "admin1"),
        transaction(2, "Jane Smith", vec![p2], "admin1"),
    ])?;
    store.transactions().insert_many(vec![
        transaction(3, "Alice Johnson", vec![p3], "admin2"),
        transaction(4, "Bob Brown", vec![p4], "admin2"),
    ])?;

    tracing::debug!("Store initialized with sample records");
    Ok(())
}

fn product(
    id: i64,
    name: &str,
    price: f64,
    description: &str,
    barcode: &str,
    quantity: i64,
    admin_id: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        description: description.to_string(),
        barcode: barcode.to_string(),
        front_image: String::new(),
        back_image: String::new(),
        quantity,
        admin_id: AdminId::new(admin_id),
    }
}

fn transaction(id: i64, customer_name: &str, items: Vec<Product>, admin_id: &str) -> Transaction {
    let total = items.iter().map(|p| p.price).sum();
    Transaction {
        id: TransactionId::new(id),
        customer_name: customer_name.to_string(),
        items,
        total,
        admin_id: AdminId::new(admin_id),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).unwrap();

        run(&store).unwrap();

        let admins = store.admins().all();
        assert_eq!(admins.len(), 2);
        assert_eq!(admins.first().unwrap().username, "admin1");

        let admin1 = AdminId::new("admin1");
        let admin2 = AdminId::new("admin2");
        assert_eq!(store.products().find_all_for_admin(&admin1).len(), 2);
        assert_eq!(store.products().find_all_for_admin(&admin2).len(), 2);
        assert_eq!(store.transactions().find_all_for_admin(&admin1).len(), 2);
        assert_eq!(store.transactions().find_all_for_admin(&admin2).len(), 2);

        // Transaction totals equal the snapshot product's price.
        let transactions = store.transactions().find_all_for_admin(&admin2);
        let first = transactions.first().unwrap();
        assert!((first.total - 15.0).abs() < f64::EPSILON);
        assert_eq!(first.items.len(), 1);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).unwrap();

        run(&store).unwrap();
        run(&store).unwrap();

        assert_eq!(store.admins().all().len(), 2);
        assert_eq!(
            store
                .products()
                .find_all_for_admin(&AdminId::new("admin1"))
                .len(),
            2
        );
    }

    #[test]
    fn test_seeded_passwords_verify() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).unwrap();

        run(&store).unwrap();

        let admin = store.admins().find_by_username("admin1").unwrap();
        assert!(auth::verify_password("password1", &admin.password_hash).is_ok());
        assert!(auth::verify_password("password2", &admin.password_hash).is_err());
    }
}
