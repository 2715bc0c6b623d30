//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the client and the remote
//! messaging API. All DTOs use JSON serialization via `serde`.
//!
//! ## Wire format
//!
//! The backend is the source of truth for the encoding:
//!
//! - Field names are **camelCase** (`loginToken`, `hashedPassword`).
//! - 64-bit identifiers and timestamps travel as **decimal strings** so
//!   JavaScript clients cannot silently lose precision; see [`wire`] for
//!   the serde adapters.
//! - Enumerated request kinds are small **integers**
//!   (e.g. list-groups: 0 = all, 1 = joined, 2 = not joined).
//! - Collections may arrive as `null`; response structs keep them as
//!   `Option` and consumers normalize to empty.
//!
//! ## Structure
//!
//! - **[`dto`]**: request/response bodies per endpoint
//!   - [`dto::auth`], [`dto::people`], [`dto::groups`], [`dto::messages`],
//!     [`dto::push`]
//! - **[`wire`]**: `Uuid` and string-encoded number adapters

pub mod dto;
pub mod wire;

pub use dto::*;
pub use wire::{Uuid, INVALID_UUID};
