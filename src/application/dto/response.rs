//! Response DTOs
//!
//! Success envelope shared by every JSON endpoint. The matching error
//! envelope lives with [`AppError`](crate::shared::error::AppError).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Successful API response: `{ status_code, status: true, result }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub status: bool,
    pub result: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap `result` in a 200 envelope.
    pub fn ok(result: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            status: true,
            result,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
