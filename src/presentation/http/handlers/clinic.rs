//! Clinic Search Handlers
//!
//! `GET /clinics/get_dental_clinics` and `GET /clinics/get_vet_clinics`.
//! Both accept `clinicName`, `state`, `openFrom`, `openTo` and `condition`.

use axum::extract::{Query, State};

use crate::application::dto::{ApiResponse, ClinicSearchParams};
use crate::application::services::{ClinicService, ClinicServiceImpl};
use crate::domain::{DentalClinic, VetClinic};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Search the dental clinic directory
pub async fn get_dental_clinics(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ApiResponse<Vec<DentalClinic>>, AppError> {
    let params = ClinicSearchParams::from_pairs(pairs);
    let service = ClinicServiceImpl::new(state.directory.clone());

    let clinics = service.search_dental_clinics(&params).await?;

    Ok(ApiResponse::ok(clinics))
}

/// Search the veterinary clinic directory
pub async fn get_vet_clinics(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ApiResponse<Vec<VetClinic>>, AppError> {
    let params = ClinicSearchParams::from_pairs(pairs);
    let service = ClinicServiceImpl::new(state.directory.clone());

    let clinics = service.search_vet_clinics(&params).await?;

    Ok(ApiResponse::ok(clinics))
}
