//! Admin account record.

use serde::{Deserialize, Serialize};

use crate::types::id::AdminId;

/// An administrator account.
///
/// Admins are created only by the first-run seed; there is no registration
/// endpoint. The record is immutable after creation. `admin_id` is the tenant
/// partition key referenced by every product and transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Login name, unique across the admins collection.
    pub username: String,
    /// Argon2id PHC string. Never the plaintext password.
    pub password_hash: String,
    /// Tenant partition key.
    pub admin_id: AdminId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let admin = Admin {
            username: "admin1".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            admin_id: AdminId::new("admin1"),
        };

        let json = serde_json::to_value(&admin).unwrap();
        assert!(json.get("passwordHash").is_some());
        assert!(json.get("adminId").is_some());
        assert!(json.get("password_hash").is_none());
    }
}
