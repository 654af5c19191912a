//! Upstream Directory Tests
//!
//! Run the reqwest-backed directory and the full application against a local
//! server standing in for the public clinic lists.

use std::net::SocketAddr;

use pretty_assertions::assert_eq;
use serde_json::Value;

use clinic_search::config::{CorsSettings, DirectorySettings, ServerSettings, Settings};
use clinic_search::domain::{ClinicDirectory, DirectoryError};
use clinic_search::infrastructure::directory::{create_http_client, HttpClinicDirectory};
use clinic_search::startup::Application;

use crate::common::{dental_fixtures, spawn_upstream, vet_fixtures};

fn directory_settings(upstream: SocketAddr, dental: &str, vet: &str) -> DirectorySettings {
    DirectorySettings {
        dental_url: format!("http://{}/{}", upstream, dental),
        vet_url: format!("http://{}/{}", upstream, vet),
        request_timeout_secs: Some(5),
    }
}

fn directory(settings: &DirectorySettings) -> HttpClinicDirectory {
    let client = create_http_client(settings).unwrap();
    HttpClinicDirectory::from_settings(client, settings)
}

#[tokio::test]
async fn test_fetches_both_directories() {
    let upstream = spawn_upstream().await;
    let directory = directory(&directory_settings(upstream, "dental.json", "vet.json"));

    assert_eq!(directory.dental_clinics().await.unwrap(), dental_fixtures());
    assert_eq!(directory.vet_clinics().await.unwrap(), vet_fixtures());
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    let upstream = spawn_upstream().await;
    let directory = directory(&directory_settings(upstream, "broken.json", "wrong-shape.json"));

    assert!(matches!(
        directory.dental_clinics().await,
        Err(DirectoryError::Decode { .. })
    ));
    assert!(matches!(
        directory.vet_clinics().await,
        Err(DirectoryError::Decode { .. })
    ));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let upstream = spawn_upstream().await;
    let directory = directory(&directory_settings(upstream, "missing.json", "vet.json"));

    match directory.dental_clinics().await {
        Err(DirectoryError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_upstream_is_a_fetch_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let directory = directory(&directory_settings(addr, "dental.json", "vet.json"));

    assert!(matches!(
        directory.dental_clinics().await,
        Err(DirectoryError::Fetch { .. })
    ));
}

fn app_settings(directory: DirectorySettings) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        directory,
        cors: CorsSettings {
            allowed_origins: Vec::new(),
        },
        environment: "test".into(),
    }
}

#[tokio::test]
async fn test_application_serves_filtered_upstream_data() {
    let upstream = spawn_upstream().await;
    let settings = app_settings(directory_settings(upstream, "dental.json", "vet.json"));

    let application = Application::build(settings).await.unwrap();
    let addr = application.local_addr().unwrap();
    tokio::spawn(application.run_until_stopped());

    let body: Value = reqwest::get(format!(
        "http://{}/clinics/get_vet_clinics?state=ks&condition=and",
        addr
    ))
    .await
    .unwrap()
    .json()
    .await
    .unwrap();

    assert_eq!(body["status"], true);
    assert_eq!(body["result"][0]["clinicName"], "German Pets Clinics");
    assert_eq!(body["result"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_application_reports_upstream_failure() {
    let upstream = spawn_upstream().await;
    let settings = app_settings(directory_settings(upstream, "broken.json", "missing.json"));

    let application = Application::build(settings).await.unwrap();
    let addr = application.local_addr().unwrap();
    tokio::spawn(application.run_until_stopped());

    for path in ["get_dental_clinics", "get_vet_clinics"] {
        let response = reqwest::get(format!("http://{}/clinics/{}", addr, path))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 500);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "There is some issue.");
    }
}
