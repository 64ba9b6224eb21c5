//! Application-wide error type and HTTP mapping.
//!
//! Every handler returns [`AppError`] on failure; `IntoResponse` renders
//! it as `{"error": {code, message, details}}` with a status matching the
//! error kind. Pipeline failures ([`GenerationError`]) are mapped here so
//! handlers never inspect error shapes ad hoc.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::generation::error::GenerationError;

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

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Forbidden { message: String, details: Value },
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
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

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (kind, message) = match self {
            AppError::Validation { message, .. } => ("validation", message),
            AppError::NotFound { message, .. } => ("not_found", message),
            AppError::Forbidden { message, .. } => ("forbidden", message),
            AppError::Upstream { message, .. } => ("upstream", message),
            AppError::Internal { message, .. } => ("internal", message),
        };
        write!(f, "{kind}: {message}")
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
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Forbidden { message, details } => {
                (StatusCode::FORBIDDEN, "forbidden", message, details)
            }
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
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
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

/// Maps pipeline failures onto HTTP-facing error kinds per the error
/// taxonomy: caller faults are 400, model-side faults are 502/500.
impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidInput { field } => AppError::bad_request(
                "Missing required fields",
                json!({ "field": field }),
            ),
            GenerationError::Upstream { message } => AppError::upstream(
                "Offer generation is temporarily unavailable",
                json!({ "reason": message }),
            ),
            GenerationError::EmptyResponse => AppError::internal(
                "The model returned an empty response",
                json!({}),
            ),
            GenerationError::MalformedJson { reason, raw } => {
                tracing::error!(%reason, raw = %raw, "model output was not valid JSON");
                AppError::internal(
                    "The model returned invalid data",
                    json!({ "reason": reason }),
                )
            }
            GenerationError::SchemaViolation { violations, raw } => {
                tracing::error!(?violations, raw = %raw, "model output violated the response contract");
                AppError::internal(
                    "The model returned an invalid data structure",
                    json!({ "violations": violations }),
                )
            }
        }
    }
}
