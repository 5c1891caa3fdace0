//! contacts-store: storage gateway for the Contacts API
//!
//! This crate provides:
//! - MongoDB storage for the `contacts` and `users` collections
//! - A [`Gateway`] owning the lifecycle of the shared connection
//! - Typed document models and one-driver-call CRUD operations
//!
//! # Architecture
//!
//! The store wraps a single `mongodb::Database` handle. The driver's own
//! internal pooling makes the handle safe to reuse across concurrently
//! in-flight requests; this layer adds no locking, transactions, retries,
//! or timeouts of its own.
//!
//! # Usage
//!
//! ```rust,ignore
//! use contacts_store::{Gateway, StoreConfig};
//!
//! let gateway = Gateway::new(StoreConfig::from_env()?);
//! let store = gateway.connect().await?;
//!
//! let contacts = store.list_contacts().await?;
//! ```

pub mod error;
pub mod gateway;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use gateway::Gateway;
pub use models::{ContactDocument, DbDiagnostics};
pub use store::{Store, StoreConfig, CONTACTS_COLLECTION, USERS_COLLECTION};

// Re-export contacts-core for downstream crates
pub use contacts_core;
