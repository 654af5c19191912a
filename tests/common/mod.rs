//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use clinic_search::domain::{
    ClinicDirectory, DentalClinic, DirectoryError, OpeningHours, VetClinic,
};
use clinic_search::presentation::http::routes;
use clinic_search::startup::AppState;

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Application backed by the fixture directories
    pub fn new() -> Self {
        Self::with_directory(StubDirectory::fixtures())
    }

    /// Application whose directories always fail to decode
    pub fn broken() -> Self {
        Self::with_directory(StubDirectory::broken())
    }

    pub fn with_directory(directory: StubDirectory) -> Self {
        let state = AppState::new(Arc::new(directory));
        Self {
            router: routes::create_router(state),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.request("GET", uri).await
    }

    /// Make a bodiless request with any method
    pub async fn request(&self, method: &str, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// GET `uri` and decode the JSON body
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        self.request_json("GET", uri).await
    }

    /// Send `method` to `uri` and decode the JSON body
    pub async fn request_json(&self, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = self.request(method, uri).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

/// In-memory clinic directory
pub struct StubDirectory {
    pub dental: Vec<DentalClinic>,
    pub vet: Vec<VetClinic>,
    pub broken: bool,
}

impl StubDirectory {
    pub fn fixtures() -> Self {
        Self {
            dental: dental_fixtures(),
            vet: vet_fixtures(),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            dental: Vec::new(),
            vet: Vec::new(),
            broken: true,
        }
    }

    fn decode_error() -> DirectoryError {
        DirectoryError::Decode {
            url: "stub://clinics".into(),
            source: serde_json::from_str::<Vec<DentalClinic>>("{").unwrap_err(),
        }
    }
}

#[async_trait]
impl ClinicDirectory for StubDirectory {
    async fn dental_clinics(&self) -> Result<Vec<DentalClinic>, DirectoryError> {
        if self.broken {
            return Err(Self::decode_error());
        }
        Ok(self.dental.clone())
    }

    async fn vet_clinics(&self) -> Result<Vec<VetClinic>, DirectoryError> {
        if self.broken {
            return Err(Self::decode_error());
        }
        Ok(self.vet.clone())
    }
}

pub fn dental(name: &str, state: &str, from: &str, to: &str) -> DentalClinic {
    DentalClinic {
        name: name.into(),
        state_name: state.into(),
        availability: OpeningHours::new(from, to),
    }
}

pub fn vet(name: &str, state: &str, from: &str, to: &str) -> VetClinic {
    VetClinic {
        clinic_name: name.into(),
        state_code: state.into(),
        opening: OpeningHours::new(from, to),
    }
}

pub fn dental_fixtures() -> Vec<DentalClinic> {
    vec![
        dental("Good Health Home", "Alaska", "10:00", "19:30"),
        dental("Mayo Clinic", "Florida", "09:00", "17:00"),
        dental("Cleveland Clinic", "New York", "11:00", "22:00"),
        dental("Hopkins Hospital Baltimore", "Florida", "07:30", "16:00"),
    ]
}

pub fn vet_fixtures() -> Vec<VetClinic> {
    vec![
        vet("Good Health Home", "FL", "15:00", "20:00"),
        vet("National Veterinary Clinic", "CA", "15:00", "22:30"),
        vet("German Pets Clinics", "KS", "08:00", "20:00"),
    ]
}

/// Names found in a success envelope's `result`
pub fn result_names(body: &Value, name_field: &str) -> Vec<String> {
    body["result"]
        .as_array()
        .expect("result should be an array")
        .iter()
        .map(|c| c[name_field].as_str().unwrap().to_string())
        .collect()
}

/// Serve fixed JSON documents the way the public directories do.
///
/// `/dental.json` and `/vet.json` hold the fixtures, `/broken.json` is not
/// JSON and `/missing.json` answers 404.
pub async fn spawn_upstream() -> SocketAddr {
    let dental = serde_json::to_value(dental_fixtures()).unwrap();
    let vet = serde_json::to_value(vet_fixtures()).unwrap();

    let app = Router::new()
        .route(
            "/dental.json",
            get(move || {
                let body = dental.clone();
                async move { axum::Json(body) }
            }),
        )
        .route(
            "/vet.json",
            get(move || {
                let body = vet.clone();
                async move { axum::Json(body) }
            }),
        )
        .route("/broken.json", get(|| async { "<html>not json</html>" }))
        .route(
            "/wrong-shape.json",
            get(|| async { axum::Json(json!([{ "title": "Mayo Clinic" }])) }),
        )
        .route("/missing.json", get(|| async { StatusCode::NOT_FOUND }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
