//! Core types for Countertill.
//!
//! Record types serialize with the camelCase field names used in the store
//! file and on the wire (`adminId`, `customerName`, ...).

pub mod admin;
pub mod id;
pub mod product;
pub mod transaction;

pub use admin::Admin;
pub use id::*;
pub use product::Product;
pub use transaction::Transaction;
