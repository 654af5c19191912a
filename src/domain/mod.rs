//! # Domain Layer
//!
//! Clinic records, search conditions and the filtering rules applied to them.
//! Nothing in here knows about HTTP or the upstream directories.
//!
//! ## Structure
//!
//! - **entities**: Dental and veterinary clinic records
//! - **value_objects**: Search condition, operator and time window
//! - **services**: The clinic filter engine
//! - **directory**: Contract for the remote clinic lists

pub mod directory;
pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use directory::{ClinicDirectory, DirectoryError};
pub use entities::*;
pub use services::*;
pub use value_objects::*;
