//! Sales transaction record.

use serde::{Deserialize, Serialize};

use crate::types::id::{AdminId, TransactionId};
use crate::types::product::Product;

/// A recorded sale.
///
/// Transactions are append-only. `items` holds a snapshot of the sold
/// products at the time of sale, not references into the catalog: later
/// catalog edits never change a stored transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Client-supplied transaction ID (no uniqueness enforced by the store).
    pub id: TransactionId,
    /// Name of the purchasing customer.
    pub customer_name: String,
    /// Snapshot of the sold products.
    pub items: Vec<Product>,
    /// Sale total.
    pub total: f64,
    /// Owning tenant. Always overwritten by the API layer.
    #[serde(default)]
    pub admin_id: AdminId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::id::ProductId;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            price: 10.0,
            description: "A widget".to_string(),
            barcode: "123456".to_string(),
            front_image: String::new(),
            back_image: String::new(),
            quantity: 100,
            admin_id: AdminId::new("admin1"),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let transaction = Transaction {
            id: TransactionId::new(1),
            customer_name: "John Doe".to_string(),
            items: vec![sample_product()],
            total: 10.0,
            admin_id: AdminId::new("admin1"),
        };

        let json = serde_json::to_value(&transaction).unwrap();
        assert!(json.get("customerName").is_some());
        assert!(json.get("adminId").is_some());
    }

    #[test]
    fn test_items_are_copies_not_references() {
        let product = sample_product();
        let transaction = Transaction {
            id: TransactionId::new(1),
            customer_name: "John Doe".to_string(),
            items: vec![product.clone()],
            total: product.price,
            admin_id: product.admin_id.clone(),
        };

        // Mutating the original product leaves the snapshot untouched.
        let mut edited = product;
        edited.price = 20.0;
        let recorded = transaction
            .items
            .first()
            .map(|p| p.price)
            .unwrap_or_default();
        assert!((recorded - 10.0).abs() < f64::EPSILON);
        assert!((edited.price - 20.0).abs() < f64::EPSILON);
    }
}
