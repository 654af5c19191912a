//! Value Objects
//!
//! Immutable value types describing a clinic search.

pub mod search;

pub use search::*;
