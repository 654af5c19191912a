//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clinic_search::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Dental clinics are read from {}", settings.directory.dental_url);
//! ```

mod settings;

pub use settings::*;
