//! # Background Tasks
//!
//! Async tasks spawned off the driving thread, reporting back via events.

pub(crate) mod refresh;
