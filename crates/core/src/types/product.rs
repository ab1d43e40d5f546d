//! Product catalog record.

use serde::{Deserialize, Serialize};

use crate::types::id::{AdminId, ProductId};

/// A catalog product belonging to one admin.
///
/// Products are replaced wholesale: the unit of mutation is an admin's entire
/// catalog, never a single product. `admin_id` defaults to empty on
/// deserialization because clients may omit it; the API layer stamps the path
/// parameter over whatever the client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Client-supplied product ID (no uniqueness enforced by the store).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Free-form description.
    pub description: String,
    /// Scannable barcode value.
    pub barcode: String,
    /// Front image URI, or empty when none is set.
    #[serde(default)]
    pub front_image: String,
    /// Back image URI, or empty when none is set.
    #[serde(default)]
    pub back_image: String,
    /// Units in stock.
    pub quantity: i64,
    /// Owning tenant. Always overwritten by the API layer.
    #[serde(default)]
    pub admin_id: AdminId,
}
