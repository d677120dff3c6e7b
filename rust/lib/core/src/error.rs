use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Clients match on these,
// never on the human-readable message string.

/// Stable error code constants.
///
/// Clients should match on `code` from `{"code": "NOT_FOUND", "message": "..."}`.
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type returned by every handler.
///
/// Each variant maps to a stable error code (see [`error_code`]) and an
/// HTTP status code. The JSON response always includes both:
///
/// ```json
/// {"code": "NOT_FOUND", "message": "User with ID abc not found"}
/// ```
///
/// Storage failures additionally carry the backend's own text under `error`.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Resource does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Input data is invalid or incomplete. HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Storage backend rejected or failed the operation. HTTP 500.
    #[error("{message}")]
    Storage {
        /// Human-readable summary of what failed.
        message: String,
        /// Raw backend error text, passed through for diagnostics.
        error: String,
    },

    /// The request did not finish in time. HTTP 503.
    #[error("{0}")]
    Timeout(String),

    /// Unexpected internal error. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Shorthand for a [`ServiceError::Storage`].
    pub fn storage(message: impl Into<String>, error: impl ToString) -> Self {
        ServiceError::Storage {
            message: message.into(),
            error: error.to_string(),
        }
    }

    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::Storage { .. } => error_code::STORAGE_ERROR,
            ServiceError::Timeout(_) => error_code::TIMEOUT,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error.
    pub fn to_json(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        if let ServiceError::Storage { error, .. } = self {
            body["error"] = serde_json::Value::String(error.clone());
        }
        body
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status_code(), axum::Json(self.to_json())).into_response()
    }
}
