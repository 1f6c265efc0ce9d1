//! REST API error types
//!
//! Every error renders as `{"error": {"code", "message", "field"?}}` with a
//! stable status code. Source locations and file paths stay in the logs.

use lb_auth::AuthError;
use lb_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No, invalid or expired credential (401)
    #[error("Not authenticated: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Provider rejected the login (401)
    #[error("Authorization code exchange failed: {message} {location}")]
    AuthExchange {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not whitelisted (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Durable write or read failed (500)
    #[error("Persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unauthorized { ref message, .. } => (
                StatusCode::UNAUTHORIZED,
                body("NOT_AUTHENTICATED", message, None),
            ),
            ApiError::AuthExchange { ref message, .. } => (
                StatusCode::UNAUTHORIZED,
                body("AUTH_EXCHANGE_FAILED", message, None),
            ),
            ApiError::Forbidden { ref message, .. } => {
                (StatusCode::FORBIDDEN, body("FORBIDDEN", message, None))
            }
            ApiError::NotFound { ref message, .. } => {
                (StatusCode::NOT_FOUND, body("NOT_FOUND", message, None))
            }
            ApiError::Validation {
                ref message,
                ref field,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                body("VALIDATION_ERROR", message, field.clone()),
            ),
            ApiError::BadRequest { ref message, .. } => {
                (StatusCode::BAD_REQUEST, body("BAD_REQUEST", message, None))
            }
            ApiError::Persistence { ref message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("PERSISTENCE_ERROR", message, None),
            ),
            ApiError::Internal { ref message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("INTERNAL_ERROR", message, None),
            ),
        };

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

fn body(code: &str, message: &str, field: Option<String>) -> ApiErrorBody {
    ApiErrorBody {
        code: code.to_string(),
        message: message.to_string(),
        field,
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::NotAuthenticated { .. } => ApiError::Unauthorized {
                message: "Authentication required".to_string(),
                location,
            },
            AuthError::CredentialExpired { .. } => ApiError::Unauthorized {
                message: "Session expired, log in again".to_string(),
                location,
            },
            AuthError::InvalidCredential { .. } | AuthError::InvalidClaim { .. } => {
                log::debug!("Rejected credential: {}", e);
                ApiError::Unauthorized {
                    message: "Invalid session credential".to_string(),
                    location,
                }
            }
            AuthError::Forbidden { .. } => ApiError::Forbidden {
                message: "Identity is not whitelisted".to_string(),
                location,
            },
            AuthError::AuthExchange { .. } => {
                log::warn!("{}", e);
                ApiError::AuthExchange {
                    message: "Identity provider rejected the login, start again at /login"
                        .to_string(),
                    location,
                }
            }
            AuthError::CredentialEncode { .. } | AuthError::Configuration { .. } => {
                log::error!("{}", e);
                ApiError::Internal {
                    message: "Authentication is unavailable".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert record store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            StoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            StoreError::Forbidden { kind, .. } => ApiError::Forbidden {
                message: format!("Identity is not whitelisted to modify {kind} records"),
                location,
            },
            StoreError::NotFound { kind, id, .. } => ApiError::NotFound {
                message: format!("No {kind} with id {id} found"),
                location,
            },
            StoreError::Io { .. } | StoreError::Corrupted { .. } | StoreError::Serialization { .. } => {
                // Don't expose snapshot paths to clients
                log::error!("Record store error: {}", e);
                ApiError::Persistence {
                    message: "Failed to persist records".to_string(),
                    location,
                }
            }
        }
    }
}

/// Convert malformed JSON bodies to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
