//! Data Transfer Objects
//!
//! DTOs for query parsing and response serialization.

pub mod request;
pub mod response;

pub use request::{ClinicSearchParams, QueryValidationError, SearchQuery};
pub use response::ApiResponse;
