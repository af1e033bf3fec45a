//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures are logged server-side and the raw error message is
//! echoed in the payload for diagnostics.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Word creation input failed the presence check (400)
    Validation(ValidationError),

    /// The document lacks the expected array field (404).
    /// An empty array or a non-matching element is not this condition.
    NotFound { message: &'static str },

    /// An update ran but the store reported zero documents changed (500).
    /// Stale state, a lost race, and a genuinely absent target all land here.
    NoModification {
        /// Payload key the contract uses for this path: `error` for add
        /// failures, `message` for delete failures.
        key: &'static str,
        message: &'static str,
    },

    /// The store call itself failed (500, logged)
    Database {
        context: &'static str,
        source: DbError,
    },
}

impl ApiError {
    pub fn db(context: &'static str, source: DbError) -> Self {
        Self::Database { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                tracing::debug!("word validation failed: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "All fields are required" }),
                )
            }
            Self::NotFound { message } => {
                (StatusCode::NOT_FOUND, json!({ "message": message }))
            }
            Self::NoModification { key, message } => {
                tracing::error!("store reported no modification: {}", message);
                let mut body = serde_json::Map::new();
                body.insert((*key).to_string(), json!(message));
                (StatusCode::INTERNAL_SERVER_ERROR, body.into())
            }
            Self::Database { context, source } => {
                tracing::error!("{}: {}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": context, "error": source.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
