//! # Clinic Search Library
//!
//! This crate provides a small HTTP API over two remote clinic directories
//! (dental and veterinary) with:
//! - Validation of `clinicName`, `state`, `openFrom`, `openTo` and `condition`
//! - One filter engine shared by both clinic shapes, in AND or OR mode
//! - A uniform `{ status_code, status, result | message }` JSON envelope
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Clinic records, search conditions, filter rules
//! - **Application Layer**: Query parsing, the search service and DTOs
//! - **Infrastructure Layer**: The reqwest-backed directory client
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! clinic_search/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, filter engine, directory trait
//! +-- application/    Search service and DTOs
//! +-- infrastructure/ Upstream directory client
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
