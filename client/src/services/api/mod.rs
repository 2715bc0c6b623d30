//! # API Service Layer
//!
//! Typed wrappers for every backend endpoint, one module per resource.
//! All endpoints POST JSON and go through [`ApiClient`]'s shared plumbing.

pub mod auth;
pub mod client;
pub mod groups;
pub mod messages;
pub mod people;
pub mod push;

pub use client::ApiClient;
