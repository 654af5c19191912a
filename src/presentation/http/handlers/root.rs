//! Root and fallback handlers.

use axum::Json;

use crate::shared::error::AppError;

pub const WELCOME_MESSAGE: &str = "Welcome To Coding API";

/// `GET /`
pub async fn welcome() -> Json<&'static str> {
    Json(WELCOME_MESSAGE)
}

/// Any route that is not registered
pub async fn not_found() -> AppError {
    AppError::NotFound("Resource not found.".into())
}

/// Registered route called with a method other than `GET`
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method not allowed.".into())
}
