//! Application error type and its HTTP representation.
//!
//! Every error surfaced to an HTTP caller is rendered as a JSON envelope:
//!
//! ```json
//! {"error": {"code": "conflict", "message": "id already exists", "details": {...}}}
//! ```
//!
//! # Status Mapping
//!
//! - [`AppError::Validation`] → `400` (`validation_error`)
//! - [`AppError::Conflict`] → `400` (`conflict`); duplicate ids are part of the
//!   public creation contract and are reported as bad requests, not 409s
//! - [`AppError::Io`] → `500` (`io_error`)
//! - [`AppError::Internal`] → `500` (`internal_error`)

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Io { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn io(message: impl Into<String>, details: Value) -> Self {
        Self::Io {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Conflict { message, details } => {
                (StatusCode::BAD_REQUEST, "conflict", message, details)
            }
            AppError::Io { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "io_error", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = first_message(&errors).unwrap_or_else(|| "invalid request".to_string());
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request(message, details)
    }
}

/// Picks the first human-readable message out of a validation error tree.
fn first_message(errors: &validator::ValidationErrors) -> Option<String> {
    errors.errors().values().find_map(|kind| match kind {
        validator::ValidationErrorsKind::Field(field_errors) => field_errors
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string())),
        validator::ValidationErrorsKind::Struct(nested) => first_message(nested),
        validator::ValidationErrorsKind::List(items) => {
            items.values().find_map(|nested| first_message(nested))
        }
    })
}
