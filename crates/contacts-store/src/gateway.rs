//! One-time initialization of the shared database connection.
//!
//! The gateway is constructed at startup and injected into handlers via
//! application state. It owns the connection lifecycle exclusively:
//! `connect()` initializes at most once per process, and `active()` fails
//! fast when called before initialization. There is no disconnect path
//! and no implicit lazy connection.

use tokio::sync::OnceCell;

use crate::error::{StoreError, StoreResult};
use crate::store::{Store, StoreConfig};

/// Owns the lifecycle of the single shared [`Store`].
///
/// State machine: `uninitialized --connect()--> connected`. Concurrent
/// first calls to `connect()` are serialized by the cell; exactly one
/// initialization runs and the losers await its result.
pub struct Gateway {
    config: StoreConfig,
    cell: OnceCell<Store>,
}

impl Gateway {
    /// Create an unconnected gateway.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// Establish the connection exactly once.
    ///
    /// Subsequent calls are no-ops returning the existing handle. A failed
    /// attempt leaves the gateway uninitialized so a later call may retry.
    pub async fn connect(&self) -> StoreResult<&Store> {
        self.cell
            .get_or_try_init(|| Store::connect(self.config.clone()))
            .await
    }

    /// The connected store.
    ///
    /// Fails with [`StoreError::NotInitialized`] if `connect()` has not
    /// completed; callers must have triggered it during startup.
    pub fn active(&self) -> StoreResult<&Store> {
        self.cell.get().ok_or(StoreError::NotInitialized)
    }

    /// Whether `connect()` has completed.
    pub fn is_connected(&self) -> bool {
        self.cell.initialized()
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("database", &self.config.database)
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_gateway() -> Gateway {
        Gateway::new(StoreConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "contacts_test".to_string(),
        })
    }

    #[test]
    fn test_active_before_connect_fails() {
        let gateway = test_gateway();
        assert!(matches!(
            gateway.active(),
            Err(StoreError::NotInitialized)
        ));
    }

    #[test]
    fn test_new_gateway_is_not_connected() {
        let gateway = test_gateway();
        assert!(!gateway.is_connected());
    }
}
