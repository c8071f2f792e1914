//! Error type for the HTTP boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Every failure the endpoints can report. Causes are logged, never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Account not found")]
    AccountNotFound,

    /// `context` is the client-facing message for the endpoint.
    #[error("{context}: {cause}")]
    Internal { context: &'static str, cause: String },
}

impl ApiError {
    pub fn internal(context: &'static str, err: anyhow::Error) -> Self {
        ApiError::Internal {
            context,
            cause: format!("{err:#}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::AccountNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Account not found" })),
            )
                .into_response(),
            ApiError::Internal { context, cause } => {
                tracing::error!(error = %cause, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": context })),
                )
                    .into_response()
            }
        }
    }
}
