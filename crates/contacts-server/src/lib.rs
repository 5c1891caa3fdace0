//! contacts-server: HTTP API server for the Contacts API
//!
//! This crate provides:
//! - REST endpoints for the contacts and users collections
//! - A welcome route and a database diagnostic route
//! - JSON error responses with a uniform envelope
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//!
//! Each handler performs one storage operation through the injected
//! gateway and maps the result to an HTTP response.
//!
//! # Usage
//!
//! ```rust,ignore
//! use contacts_server::{config::ServerConfig, routes, state::AppState};
//! use contacts_store::{Gateway, StoreConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let gateway = Gateway::new(StoreConfig::from_env()?);
//! gateway.connect().await?;
//! let app = routes::build_router(AppState::new(gateway, config));
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use contacts_core;
pub use contacts_store;
