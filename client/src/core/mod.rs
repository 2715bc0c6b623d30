//! # Core Types
//!
//! Foundational types shared across the client: error types and the
//! [`service::ApiService`] trait used for dependency injection.

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result};
pub use service::ApiService;
