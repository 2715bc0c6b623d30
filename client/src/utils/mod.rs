//! # Utilities
//!
//! Input validation and time helpers.

pub mod time;
pub mod validation;

pub use validation::ValidationResult;
