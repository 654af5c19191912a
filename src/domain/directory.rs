//! Clinic directory trait.
//!
//! A directory is the remote source of the full clinic list for one clinic
//! type. Every call fetches the complete list again.

use async_trait::async_trait;

use crate::domain::entities::{DentalClinic, VetClinic};

/// Failure to obtain a clinic list from a directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode clinic list from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of clinic lists, one per clinic type.
#[async_trait]
pub trait ClinicDirectory: Send + Sync {
    /// Fetch every dental clinic.
    async fn dental_clinics(&self) -> Result<Vec<DentalClinic>, DirectoryError>;

    /// Fetch every veterinary clinic.
    async fn vet_clinics(&self) -> Result<Vec<VetClinic>, DirectoryError>;
}
