//! Clinic directory backed by remote JSON documents.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::DirectorySettings;
use crate::domain::{ClinicDirectory, DentalClinic, DirectoryError, VetClinic};

/// Fetches clinic lists over HTTP on every call.
#[derive(Debug, Clone)]
pub struct HttpClinicDirectory {
    client: Client,
    dental_url: String,
    vet_url: String,
}

impl HttpClinicDirectory {
    pub fn new(client: Client, dental_url: impl Into<String>, vet_url: impl Into<String>) -> Self {
        Self {
            client,
            dental_url: dental_url.into(),
            vet_url: vet_url.into(),
        }
    }

    pub fn from_settings(client: Client, settings: &DirectorySettings) -> Self {
        Self::new(client, &settings.dental_url, &settings.vet_url)
    }

    /// GET `url` and decode the body as a JSON array of `T`.
    async fn fetch_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, DirectoryError> {
        let fetch_error = |source| DirectoryError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(fetch_error)?;
        let clinics: Vec<T> =
            serde_json::from_slice(&body).map_err(|source| DirectoryError::Decode {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!(url, bytes = body.len(), count = clinics.len(), "Fetched clinic list");
        Ok(clinics)
    }
}

#[async_trait]
impl ClinicDirectory for HttpClinicDirectory {
    async fn dental_clinics(&self) -> Result<Vec<DentalClinic>, DirectoryError> {
        self.fetch_list(&self.dental_url).await
    }

    async fn vet_clinics(&self) -> Result<Vec<VetClinic>, DirectoryError> {
        self.fetch_list(&self.vet_url).await
    }
}
