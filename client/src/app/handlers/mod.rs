//! # Action Handlers
//!
//! Free functions handling user actions: validate synchronously, then spawn
//! the async work and report back via the event channel.

pub(crate) mod auth;
pub(crate) mod groups;
pub(crate) mod messages;
pub(crate) mod navigation;
