//! REST API error types
//!
//! Every error renders as `{ "error": { code, message, field } }` with a
//! matching status code.

use kc_auth::AuthError;
use kc_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "IDENTITY_CONFLICT")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// No trusted identity on the request (401)
    #[error("Not authenticated: {message} {location}")]
    NotAuthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Asserted username belongs to an unrelated account (403)
    #[error("Identity conflict: {message} {location}")]
    IdentityConflict {
        message: String,
        location: ErrorLocation,
    },

    /// Several confirmed accounts share the asserted email (403)
    #[error("Ambiguous email: {message} {location}")]
    AmbiguousEmail {
        message: String,
        location: ErrorLocation,
    },

    /// The email-matched account is bound to another identity (403)
    #[error("Account already bound: {message} {location}")]
    AccountAlreadyBound {
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

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotAuthenticated { .. } => log::debug!("{}", self),
            _ => log::error!("{}", self),
        }

        let (status, body) = match self {
            ApiError::NotAuthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "NOT_AUTHENTICATED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::IdentityConflict { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "IDENTITY_CONFLICT".into(),
                    message,
                    field: Some("preferred_username".into()),
                },
            ),
            ApiError::AmbiguousEmail { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "AMBIGUOUS_EMAIL".into(),
                    message,
                    field: Some("email".into()),
                },
            ),
            ApiError::AccountAlreadyBound { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "ACCOUNT_ALREADY_BOUND".into(),
                    message,
                    field: Some("email".into()),
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::NotAuthenticated { reason, .. } => ApiError::NotAuthenticated {
                message: reason.to_string(),
                location,
            },
            AuthError::IdentityConflict { username, email, .. } => ApiError::IdentityConflict {
                message: format!(
                    "User \"{}\" already exists but doesn't have email {}",
                    username, email
                ),
                location,
            },
            AuthError::AmbiguousEmailMatch {
                email, candidates, ..
            } => ApiError::AmbiguousEmail {
                message: format!(
                    "{} accounts are registered with {}; cannot choose one",
                    candidates, email
                ),
                location,
            },
            AuthError::AccountAlreadyBound {
                uuid,
                username,
                email,
                ..
            } => ApiError::AccountAlreadyBound {
                message: format!(
                    "Account \"{}\" with email {} is already bound to another identity; {} cannot sign in to it",
                    username, email, uuid
                ),
                location,
            },
            AuthError::Store { source, .. } => {
                // Don't expose store details to clients
                log::error!("Identity store error: {}", source);
                ApiError::Internal {
                    message: "Identity store unavailable".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
