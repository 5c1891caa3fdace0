//! User routes (read-only).
//!
//! Users are free-form documents with no field constraints enforced here:
//! - GET /users - List all users
//! - GET /users/{id} - Get a user by ID

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use mongodb::bson::{Bson, Document};

use contacts_store::StoreError;

use crate::error::{ApiError, ApiResult};
use crate::routes::parse_object_id;
use crate::state::AppState;

// ============================================================================
// Helper Functions
// ============================================================================

/// Render a stored document as client-facing JSON.
///
/// Extended-JSON forms are kept as-is except the top-level `_id`, which is
/// flattened from `{"$oid": "..."}` to its hex string.
fn document_to_json(document: Document) -> serde_json::Value {
    let mut value = Bson::Document(document).into_relaxed_extjson();
    if let Some(object) = value.as_object_mut()
        && let Some(hex) = object
            .get("_id")
            .and_then(|id| id.get("$oid"))
            .and_then(|oid| oid.as_str())
            .map(str::to_owned)
    {
        object.insert("_id".to_string(), serde_json::Value::String(hex));
    }
    value
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /users - List all users.
///
/// # Response
///
/// - 200 OK: array of user documents (possibly empty)
/// - 500 Internal Server Error: storage failure
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<serde_json::Value>>> {
    tracing::info!("GET /users");

    let store = state
        .store()
        .map_err(|e| state.storage_error("Error fetching users", e))?;
    let users = store
        .list_users()
        .await
        .map_err(|e| state.storage_error("Error fetching users", e))?;

    tracing::info!(count = users.len(), "Returning users");
    Ok(Json(users.into_iter().map(document_to_json).collect()))
}

/// GET /users/{id} - Get a user by ID.
///
/// # Response
///
/// - 200 OK: the user document
/// - 400 Bad Request: malformed identifier
/// - 404 Not Found: no matching user
/// - 500 Internal Server Error: storage failure
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    tracing::info!("GET /users/{id}");

    let id = parse_object_id(&id)?;
    let store = state
        .store()
        .map_err(|e| state.storage_error("Error fetching user", e))?;
    let user = store.get_user(id).await.map_err(|e| match e {
        StoreError::UserNotFound(_) => ApiError::NotFound("User"),
        other => state.storage_error("Error fetching user", other),
    })?;

    tracing::info!(id = %id, "Returning user");
    Ok(Json(document_to_json(user)))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn test_document_to_json_flattens_id() {
        let id = ObjectId::parse_str("682e23e8cc8f14903304a546").unwrap();
        let document = doc! { "_id": id, "name": "Racheal", "age": 28 };

        let json = document_to_json(document);
        assert_eq!(json["_id"], "682e23e8cc8f14903304a546");
        assert_eq!(json["name"], "Racheal");
        assert_eq!(json["age"], 28);
    }

    #[test]
    fn test_document_to_json_leaves_non_oid_id_alone() {
        let document = doc! { "_id": "custom-key", "name": "Racheal" };

        let json = document_to_json(document);
        assert_eq!(json["_id"], "custom-key");
    }

    #[test]
    fn test_document_to_json_without_id() {
        let document = doc! { "name": "Racheal" };

        let json = document_to_json(document);
        assert_eq!(json["name"], "Racheal");
        assert!(json.get("_id").is_none());
    }
}
