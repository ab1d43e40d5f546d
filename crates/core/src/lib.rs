//! Countertill Core - Shared domain types.
//!
//! This crate provides the record types shared by the Countertill
//! components:
//! - `server` - HTTP API and flat-file document store
//! - `cli` - Offline maintenance tool for the store file
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the `Admin`, `Product`, and `Transaction`
//!   records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
