//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Remote clinic directories (HTTP + JSON)

pub mod directory;
