//! Clinic Search Service
//!
//! Runs a search request end to end: validate the query, fetch the full
//! directory, then return it untouched or filtered.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{ClinicSearchParams, QueryValidationError, SearchQuery};
use crate::domain::{
    ClinicDirectory, ClinicFilter, ClinicRecord, DentalClinic, DirectoryError, VetClinic,
};

/// Clinic search service trait.
#[async_trait]
pub trait ClinicService: Send + Sync {
    /// Search the dental clinic directory.
    async fn search_dental_clinics(
        &self,
        params: &ClinicSearchParams,
    ) -> Result<Vec<DentalClinic>, SearchError>;

    /// Search the veterinary clinic directory.
    async fn search_vet_clinics(
        &self,
        params: &ClinicSearchParams,
    ) -> Result<Vec<VetClinic>, SearchError>;
}

/// Clinic search errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] QueryValidationError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Clinic search service backed by a [`ClinicDirectory`].
pub struct ClinicServiceImpl<D>
where
    D: ClinicDirectory + ?Sized,
{
    directory: Arc<D>,
}

impl<D> ClinicServiceImpl<D>
where
    D: ClinicDirectory + ?Sized,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

/// Apply a validated query to a freshly fetched directory.
fn narrow<T: ClinicRecord>(query: &SearchQuery, clinics: Vec<T>) -> Vec<T> {
    if query.unfiltered {
        return clinics;
    }

    let total = clinics.len();
    let matched = ClinicFilter::apply(clinics, &query.condition, query.operator);
    tracing::debug!(
        operator = %query.operator,
        only_time_conditions = query.only_time_conditions(),
        total,
        matched = matched.len(),
        "Filtered clinic list"
    );
    matched
}

#[async_trait]
impl<D> ClinicService for ClinicServiceImpl<D>
where
    D: ClinicDirectory + ?Sized + 'static,
{
    async fn search_dental_clinics(
        &self,
        params: &ClinicSearchParams,
    ) -> Result<Vec<DentalClinic>, SearchError> {
        let query = params.parse()?;
        let clinics = self.directory.dental_clinics().await?;
        Ok(narrow(&query, clinics))
    }

    async fn search_vet_clinics(
        &self,
        params: &ClinicSearchParams,
    ) -> Result<Vec<VetClinic>, SearchError> {
        let query = params.parse()?;
        let clinics = self.directory.vet_clinics().await?;
        Ok(narrow(&query, clinics))
    }
}
