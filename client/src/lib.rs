//! # 3moji Client Core
//!
//! Headless client core for an ephemeral, emoji-only group messaging app.
//!
//! This crate drives everything below the rendering layer:
//!
//! - **[`services::api`]**: Typed HTTP client for the backend API. Server
//!   rejections come back as structured values, not panics or opaque strings.
//! - **[`services::session`]**: Login token persistence across launches.
//! - **[`app`]**: Application orchestrator with screen navigation, shared
//!   state behind `Arc<RwLock<AppState>>`, and an event channel connecting
//!   async tasks back to the driving thread.
//! - **[`utils`]**: Input validation and local-time helpers.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern: user actions validate
//! input synchronously, then spawn Tokio tasks that call the API and send an
//! [`app::AppEvent`] back through an unbounded `async_channel`. The driving
//! loop applies each event to state via the event handler.

pub mod app;
pub mod core;
pub mod services;
pub mod utils;
