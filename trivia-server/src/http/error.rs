//! API error types with IntoResponse
//!
//! Every error renders the same envelope:
//! `{"success": false, "error": <status code>, "message": <fixed text>}`.
//! Details go to the log, never to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::ValidationError;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (400)
    BadRequest { reason: String },

    /// Resource or route not found (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists, method does not (405)
    MethodNotAllowed,

    /// Validation or store failure (422, logged)
    Unprocessable { reason: String },

    /// Unexpected failure (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Bad request",
            Self::NotFound { .. } => "Not found",
            Self::MethodNotAllowed => "The method is not allowed for the requested URL.",
            Self::Unprocessable { .. } => "Unable to process entity",
            Self::Internal { .. } => "Server error",
        }
    }

    /// Collapse any failure into a 404 (category listing).
    pub fn into_not_found(self) -> Self {
        match self {
            Self::NotFound { .. } => self,
            other => {
                tracing::warn!(error = ?other, "reporting failure as not found");
                Self::NotFound {
                    resource: "category",
                    id: String::new(),
                }
            }
        }
    }

    /// Collapse any failure into a 500 (quiz play).
    pub fn into_internal(self) -> Self {
        match self {
            Self::Internal { .. } => self,
            other => Self::Internal {
                message: format!("{:?}", other),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::debug!("Bad request: {}", reason),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::warn!("Unprocessable: {}", reason),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Unprocessable {
            reason: e.to_string(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Sqlx(e) => {
                tracing::error!("Database error: {}", e);
                Self::Unprocessable {
                    reason: "database error".into(),
                }
            }
        }
    }
}
