//! Welcome and database diagnostic endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Diagnostic response for GET /debug/db.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugDbResponse {
    pub db_connected: bool,
    pub db_name: String,
    pub contacts_collection: bool,
    pub contact_count: u64,
    pub message: &'static str,
}

/// Returned with a 404 when the contacts collection does not exist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingCollectionResponse {
    pub error: &'static str,
    pub available_collections: Vec<String>,
}

/// GET / - Static welcome text.
async fn welcome() -> &'static str {
    "Welcome to the Contacts API"
}

/// GET /debug/db - Connection and collection diagnostic.
///
/// # Response
///
/// - 200 OK: connection state, collection presence, and contact count
/// - 404 Not Found: contacts collection missing; lists available collections
/// - 500 Internal Server Error: storage failure
async fn debug_db(State(state): State<AppState>) -> ApiResult<Response> {
    tracing::info!("GET /debug/db");

    let store = state
        .store()
        .map_err(|e| state.storage_error("Database debug route error", e))?;
    let diagnostics = store
        .diagnostics()
        .await
        .map_err(|e| state.storage_error("Database debug route error", e))?;

    if !diagnostics.contacts_collection {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(MissingCollectionResponse {
                error: "Contacts collection not found",
                available_collections: diagnostics.collections,
            }),
        )
            .into_response());
    }

    let message = if diagnostics.contact_count > 0 {
        "Contacts found in database"
    } else {
        "Contacts collection exists but is empty"
    };

    Ok(Json(DebugDbResponse {
        db_connected: true,
        db_name: store.database_name().to_string(),
        contacts_collection: true,
        contact_count: diagnostics.contact_count,
        message,
    })
    .into_response())
}

/// Build welcome and diagnostic routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/debug/db", get(debug_db))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_welcome_text() {
        assert_eq!(welcome().await, "Welcome to the Contacts API");
    }

    #[test]
    fn test_debug_response_serializes_camel_case() {
        let response = DebugDbResponse {
            db_connected: true,
            db_name: "contacts_db".to_string(),
            contacts_collection: true,
            contact_count: 3,
            message: "Contacts found in database",
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dbConnected"], true);
        assert_eq!(json["dbName"], "contacts_db");
        assert_eq!(json["contactsCollection"], true);
        assert_eq!(json["contactCount"], 3);
    }

    #[test]
    fn test_missing_collection_response_serialize() {
        let response = MissingCollectionResponse {
            error: "Contacts collection not found",
            available_collections: vec!["users".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Contacts collection not found");
        assert_eq!(json["availableCollections"][0], "users");
    }
}
