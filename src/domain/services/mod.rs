//! # Domain Services
//!
//! Domain services encapsulate logic that doesn't naturally belong to a
//! single entity.
//!
//! ## Services
//!
//! - **ClinicFilter**: AND/OR filtering of clinic records by a search condition

mod clinic_filter;

pub use clinic_filter::*;
