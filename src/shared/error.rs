//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::services::SearchError;

/// Message returned for any upstream directory failure.
pub const UPSTREAM_ERROR_MESSAGE: &str = "There is some issue.";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// Error response body: `{ status_code, status: false, message }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub status: bool,
    pub message: String,
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Validation(e) => AppError::Validation(e.to_string()),
            SearchError::Directory(e) => AppError::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(msg) => {
                tracing::error!("Clinic directory unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_ERROR_MESSAGE.into(),
                )
            }
        };

        let body = ErrorResponse {
            status_code: status.as_u16(),
            status: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}
