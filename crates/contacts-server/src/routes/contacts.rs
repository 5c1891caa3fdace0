//! Contact CRUD routes.
//!
//! This module implements the contact endpoints:
//! - GET /contacts - List all contacts
//! - GET /contacts/{id} - Get a contact by ID
//! - POST /contacts - Create a new contact
//! - PUT /contacts/{id} - Replace a contact
//! - DELETE /contacts/{id} - Delete a contact
//!
//! Identifier format and required fields are validated before any storage
//! access. Lists are unordered and unbounded.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use contacts_core::ContactInput;
use contacts_store::{ContactDocument, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::routes::parse_object_id;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// A contact as returned to clients: the five fields plus the identifier.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    /// Store-generated identifier, hex encoded.
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub favorite_color: String,
    pub birthday: String,
}

impl From<ContactDocument> for ContactResponse {
    fn from(document: ContactDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            first_name: document.first_name,
            last_name: document.last_name,
            email: document.email,
            favorite_color: document.favorite_color,
            birthday: document.birthday,
        }
    }
}

/// Response for POST /contacts.
#[derive(Debug, Serialize)]
pub struct CreateContactResponse {
    /// The created contact's identifier, hex encoded.
    pub id: String,
    /// Confirmation message.
    pub message: String,
}

/// Response for DELETE /contacts/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteContactResponse {
    /// Confirmation message.
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /contacts - List all contacts.
///
/// Returns every document in the collection, in storage-native order.
///
/// # Response
///
/// - 200 OK: array of contacts (possibly empty)
/// - 500 Internal Server Error: storage failure
async fn list_contacts(State(state): State<AppState>) -> ApiResult<Json<Vec<ContactResponse>>> {
    tracing::info!("GET /contacts");

    let store = state
        .store()
        .map_err(|e| state.storage_error("Could not fetch contacts", e))?;
    let contacts = store
        .list_contacts()
        .await
        .map_err(|e| state.storage_error("Could not fetch contacts", e))?;

    tracing::info!(count = contacts.len(), "Returning contacts");
    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

/// GET /contacts/{id} - Get a contact by ID.
///
/// # Response
///
/// - 200 OK: the contact
/// - 400 Bad Request: malformed identifier
/// - 404 Not Found: no matching contact
/// - 500 Internal Server Error: storage failure
async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ContactResponse>> {
    tracing::info!("GET /contacts/{id}");

    let id = parse_object_id(&id)?;
    let store = state
        .store()
        .map_err(|e| state.storage_error("Failed to fetch contact", e))?;
    let contact = store.get_contact(id).await.map_err(|e| match e {
        StoreError::ContactNotFound(_) => ApiError::NotFound("Contact"),
        other => state.storage_error("Failed to fetch contact", other),
    })?;

    tracing::info!(id = %id, "Returning contact");
    Ok(Json(ContactResponse::from(contact)))
}

/// POST /contacts - Create a new contact.
///
/// All five fields must be present and non-empty; the insert is not
/// attempted otherwise.
///
/// # Response
///
/// - 201 Created: `{ "id": "...", "message": "Contact created successfully" }`
/// - 400 Bad Request: missing required fields
/// - 500 Internal Server Error: storage failure
async fn create_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> ApiResult<(StatusCode, Json<CreateContactResponse>)> {
    tracing::info!("POST /contacts");

    let contact = input.validate().map_err(|missing| {
        tracing::warn!(?missing, "Missing required fields");
        ApiError::MissingFields
    })?;

    let store = state
        .store()
        .map_err(|e| state.storage_error("Failed to create contact", e))?;
    let id = store
        .insert_contact(&contact)
        .await
        .map_err(|e| state.storage_error("Failed to create contact", e))?;

    tracing::info!(id = %id, "Created new contact");
    Ok((
        StatusCode::CREATED,
        Json(CreateContactResponse {
            id: id.to_hex(),
            message: "Contact created successfully".to_string(),
        }),
    ))
}

/// PUT /contacts/{id} - Replace a contact.
///
/// Full-document replace: all five fields are required, exactly as for
/// create. Identifier and fields are validated before storage access.
///
/// # Response
///
/// - 204 No Content: updated
/// - 400 Bad Request: malformed identifier or missing required fields
/// - 404 Not Found: no matching contact
/// - 500 Internal Server Error: storage failure
async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ContactInput>,
) -> ApiResult<StatusCode> {
    tracing::info!("PUT /contacts/{id}");

    let id = parse_object_id(&id)?;
    let contact = input.validate().map_err(|missing| {
        tracing::warn!(?missing, "Missing required fields");
        ApiError::MissingFields
    })?;

    let store = state
        .store()
        .map_err(|e| state.storage_error("Failed to update contact", e))?;
    store
        .replace_contact(id, &contact)
        .await
        .map_err(|e| match e {
            StoreError::ContactNotFound(_) => ApiError::NotFound("Contact"),
            other => state.storage_error("Failed to update contact", other),
        })?;

    tracing::info!(id = %id, "Updated contact");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /contacts/{id} - Delete a contact.
///
/// # Response
///
/// - 200 OK: `{ "message": "Contact deleted successfully" }`
/// - 400 Bad Request: malformed identifier
/// - 404 Not Found: no matching contact
/// - 500 Internal Server Error: storage failure
async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteContactResponse>> {
    tracing::info!("DELETE /contacts/{id}");

    let id = parse_object_id(&id)?;
    let store = state
        .store()
        .map_err(|e| state.storage_error("Failed to delete contact", e))?;
    store.delete_contact(id).await.map_err(|e| match e {
        StoreError::ContactNotFound(_) => ApiError::NotFound("Contact"),
        other => state.storage_error("Failed to delete contact", other),
    })?;

    tracing::info!(id = %id, "Deleted contact");
    Ok(Json(DeleteContactResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}

/// Build contact routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/contacts/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

// ============================================================================
// Tests
// ============================================================================
