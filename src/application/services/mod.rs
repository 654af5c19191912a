//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ClinicService**: Validated, filtered searches over the clinic directories

pub mod clinic_service;

pub use clinic_service::{ClinicService, ClinicServiceImpl, SearchError};
