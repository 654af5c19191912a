//! Root, Health and Fallback Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Welcome To Coding API"));
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/clinics/get_cat_clinics").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "status_code": 404, "status": false, "message": "Resource not found." })
    );
}

#[tokio::test]
async fn test_unsupported_method_uses_error_envelope() {
    let app = TestApp::new();

    for uri in ["/clinics/get_dental_clinics", "/clinics/get_vet_clinics", "/"] {
        let (status, body) = app.request_json("POST", uri).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body,
            json!({ "status_code": 405, "status": false, "message": "Method not allowed." })
        );
    }
}
