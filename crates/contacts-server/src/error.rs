//! API error types with JSON responses.
//!
//! Every failure returns the envelope `{error, message?, trace?}`: a short
//! error text, an optional human-readable detail, and a diagnostic trace
//! present only when the server runs in a development configuration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use contacts_core::Contact;
use contacts_store::StoreError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed path identifier (400). Detected before any storage access.
    #[error("Invalid ID format")]
    InvalidId,

    /// Required contact fields missing or empty (400). Detected before
    /// any storage access.
    #[error("Missing required fields")]
    MissingFields,

    /// No matching document (404). Payload is the resource name.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Storage failure (500). `context` is the short route-level error
    /// text; `trace` is filled only in development.
    #[error("{context}")]
    Storage {
        context: String,
        trace: Option<String>,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable detail accompanying the short error text.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::MissingFields => Some(format!(
                "All fields ({}) are required",
                Contact::REQUIRED_FIELDS.join(", ")
            )),
            Self::Storage { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short error text (e.g. "Invalid ID format", "Contact not found").
    pub error: String,
    /// Human-readable detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Diagnostic trace, development configuration only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let trace = match &self {
            Self::Storage { trace, .. } => trace.clone(),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            message: self.message(),
            trace,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingFields.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Contact").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Storage {
                context: "Could not fetch contacts".to_string(),
                trace: None,
                source: StoreError::NotInitialized,
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_texts_match_route_contract() {
        assert_eq!(ApiError::InvalidId.to_string(), "Invalid ID format");
        assert_eq!(
            ApiError::NotFound("Contact").to_string(),
            "Contact not found"
        );
        assert_eq!(ApiError::NotFound("User").to_string(), "User not found");
    }

    #[test]
    fn test_missing_fields_message_lists_expected_fields() {
        let message = ApiError::MissingFields.message().unwrap();
        assert_eq!(
            message,
            "All fields (firstName, lastName, email, favoriteColor, birthday) are required"
        );
    }

    #[test]
    fn test_envelope_skips_absent_fields() {
        let body = ErrorResponse {
            error: "Invalid ID format".to_string(),
            message: None,
            trace: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Invalid ID format"}"#);
    }

    #[test]
    fn test_envelope_carries_trace_when_present() {
        let body = ErrorResponse {
            error: "Could not fetch contacts".to_string(),
            message: Some("database not initialized".to_string()),
            trace: Some("NotInitialized".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["trace"], "NotInitialized");
        assert_eq!(json["message"], "database not initialized");
    }
}
