//! contacts-core: domain types for the Contacts API
//!
//! This crate provides:
//! - The `Contact` record with its five required fields
//! - The `ContactInput` request shape with tolerant deserialization
//! - Required-field validation reporting missing field names
//!
//! The crate is storage-agnostic: identifiers are generated by the store
//! and live in the storage layer, not here.

pub mod contact;

pub use contact::{Contact, ContactInput};
