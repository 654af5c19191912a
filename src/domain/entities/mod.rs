//! Domain Entities
//!
//! Clinic records as published by the upstream directories.

pub mod clinic;

pub use clinic::*;
