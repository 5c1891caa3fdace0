//! Error types for the storage layer.

use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying driver connection or query error.
    #[error("database driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// Contact not found.
    #[error("contact not found: {0}")]
    ContactNotFound(ObjectId),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(ObjectId),

    /// Gateway accessed before `connect()` completed.
    #[error("database not initialized; call connect() during startup")]
    NotInitialized,

    /// The store generated an identifier of an unexpected type on insert.
    #[error("unexpected insert id: {0}")]
    UnexpectedInsertId(mongodb::bson::Bson),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
