//! # Services
//!
//! External-facing service layers: the backend API client and the on-disk
//! session store.

pub mod api;
pub mod session;

pub use api::ApiClient;
pub use session::SessionStore;
