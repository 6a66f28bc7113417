//! Application error type and its HTTP representation.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::normalizer::NormalizeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description returned in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Parse { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn parse(message: impl Into<String>, details: Value) -> Self {
        Self::Parse {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
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

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Parse { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Short reason label used for logs and metrics.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Parse { .. } => "parse_error",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::NotFound { .. } => "not_found",
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::Parse { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::NotFound { message, .. } => message,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            AppError::Validation { details, .. }
            | AppError::Parse { details, .. }
            | AppError::Unauthorized { details, .. }
            | AppError::NotFound { details, .. } => details.clone(),
        };

        ErrorInfo {
            code: self.code(),
            message: self.message().to_string(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!({ "reason": errors.to_string() }))
    }
}

impl From<NormalizeError> for AppError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::Invalid(errors) => errors.into(),
            NormalizeError::InvalidJson(reason) => {
                AppError::parse("Invalid JSON file", json!({ "reason": reason }))
            }
            NormalizeError::UnrecognizedShape(reason) => AppError::parse(
                "Unrecognized upload format",
                json!({ "reason": reason }),
            ),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let reason = rejection.body_text();
        match rejection {
            JsonRejection::JsonSyntaxError(_) => {
                AppError::parse("Invalid JSON body", json!({ "reason": reason }))
            }
            _ => AppError::bad_request("Invalid payload", json!({ "reason": reason })),
        }
    }
}
