//! Credential hashing and login verification.
//!
//! Passwords are stored as Argon2id PHC strings with a random per-hash salt,
//! so two hashes of the same password differ and neither is reversible.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

use countertill_core::Admin;

use crate::store::Store;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials (wrong password or unknown username). One variant
    /// for both so the response never reveals which part was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

/// Verify a username/password pair against the admins collection.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` when the username is unknown or
/// the password does not match its stored hash.
pub fn login(store: &Store, username: &str, password: &str) -> Result<Admin, AuthError> {
    let admin = store
        .admins()
        .find_by_username(username)
        .ok_or(AuthError::InvalidCredentials)?;

    verify_password(password, &admin.password_hash)?;

    tracing::debug!(username, "Login successful");
    Ok(admin)
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the hash is unparseable or the
/// password does not match.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use countertill_core::AdminId;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("password1").unwrap();
        assert!(verify_password("password1", &hash).is_ok());
        assert!(matches!(
            verify_password("password2", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("password1").unwrap();
        let second = hash_password("password1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_login_unknown_user_and_wrong_password_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("db.json")).unwrap();
        store
            .admins()
            .insert_many(vec![Admin {
                username: "admin1".to_string(),
                password_hash: hash_password("password1").unwrap(),
                admin_id: AdminId::new("admin1"),
            }])
            .unwrap();

        let unknown = login(&store, "nobody", "password1").unwrap_err();
        let wrong = login(&store, "admin1", "wrong").unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
