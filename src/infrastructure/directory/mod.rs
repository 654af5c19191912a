//! Directory Module
//!
//! HTTP client construction and the reqwest-backed clinic directory.

pub mod http_directory;

use reqwest::Client;

use crate::config::DirectorySettings;

pub use http_directory::HttpClinicDirectory;

/// Create the HTTP client shared by all directory requests
pub fn create_http_client(settings: &DirectorySettings) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = settings.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
