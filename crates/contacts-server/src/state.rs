//! Application state shared across handlers.

use std::sync::Arc;

use contacts_store::{Gateway, Store, StoreError};

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using
/// `State<AppState>`. The gateway is constructed and connected at startup
/// and injected here rather than accessed as ambient global state.
#[derive(Clone)]
pub struct AppState {
    /// Storage gateway.
    gateway: Arc<Gateway>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(gateway: Gateway, config: ServerConfig) -> Self {
        Self {
            gateway: Arc::new(gateway),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the storage gateway.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the active store handle.
    ///
    /// Fails when the gateway was never connected; handlers translate the
    /// failure with their route-level context via [`Self::storage_error`].
    pub fn store(&self) -> Result<&Store, StoreError> {
        self.gateway.active()
    }

    /// Translate a storage failure into an API error.
    ///
    /// Logs the failure and attaches a diagnostic trace only in a
    /// development configuration.
    pub fn storage_error(&self, context: &str, source: StoreError) -> ApiError {
        tracing::error!(error = %source, "{context}");
        let trace = self
            .config
            .is_development()
            .then(|| format!("{source:?}"));
        ApiError::Storage {
            context: context.to_string(),
            trace,
            source,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use contacts_store::StoreConfig;

    fn test_state(environment: &str) -> AppState {
        let gateway = Gateway::new(StoreConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "contacts_test".to_string(),
        });
        let config = ServerConfig {
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            environment: environment.to_string(),
        };
        AppState::new(gateway, config)
    }

    #[test]
    fn test_store_fails_before_connect() {
        let state = test_state("production");
        assert!(matches!(state.store(), Err(StoreError::NotInitialized)));
    }

    #[test]
    fn test_storage_error_without_trace_in_production() {
        let state = test_state("production");
        let error = state.storage_error("Could not fetch contacts", StoreError::NotInitialized);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(error, ApiError::Storage { trace: None, .. }));
    }

    #[test]
    fn test_storage_error_with_trace_in_development() {
        let state = test_state("development");
        let error = state.storage_error("Could not fetch contacts", StoreError::NotInitialized);
        match error {
            ApiError::Storage {
                context, trace, ..
            } => {
                assert_eq!(context, "Could not fetch contacts");
                assert!(trace.unwrap().contains("NotInitialized"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
