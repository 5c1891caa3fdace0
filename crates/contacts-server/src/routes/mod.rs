//! Route definitions for the HTTP API.

pub mod contacts;
pub mod health;
pub mod users;

use axum::Router;
use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(contacts::routes())
        .merge(users::routes())
        .with_state(state)
}

/// Validate a path identifier before any storage access.
///
/// Store-generated identifiers are fixed-length hexadecimal strings;
/// anything else is rejected with a 400.
pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex_id() {
        let id = parse_object_id("682e23e8cc8f14903304a546").unwrap();
        assert_eq!(id.to_hex(), "682e23e8cc8f14903304a546");
    }

    #[test]
    fn test_parse_object_id_accepts_well_formed_nonexistent_id() {
        // Well-formed but unlikely to match anything; format checks only.
        assert!(parse_object_id("000000000000000000000000").is_ok());
    }

    #[test]
    fn test_parse_object_id_rejects_malformed_ids() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(ApiError::InvalidId)
        ));
        assert!(matches!(parse_object_id(""), Err(ApiError::InvalidId)));
        // Too short, and non-hex characters of the right length.
        assert!(parse_object_id("682e23e8").is_err());
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}
