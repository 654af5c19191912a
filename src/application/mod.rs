//! Application Layer
//!
//! Contains the search service and data transfer objects (DTOs).
//! This layer orchestrates the flow of data between the presentation
//! and domain layers.

pub mod services;
pub mod dto;
