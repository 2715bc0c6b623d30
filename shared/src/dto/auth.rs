//! # Authentication Data Transfer Objects
//!
//! Login and sign-up payloads plus the session token issued by the server.
//! Passwords are hashed client-side; only `hashedPassword` ever appears on
//! the wire.

use crate::wire::{i64_string, Uuid};
use serde::{Deserialize, Serialize};

/// A signed-up user, as the server reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
}

/// Opaque credential issued at login/sign-up.
///
/// `valid_until` is a unix timestamp in seconds; once it has passed the
/// token must be treated as absent everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginToken {
    #[serde(with = "i64_string")]
    pub valid_until: i64,
    pub uuid: Uuid,
    pub user_email: String,
}

impl LoginToken {
    /// Whether the token has expired relative to `now` (unix seconds).
    pub fn expired_at(&self, now: i64) -> bool {
        self.valid_until <= now
    }

    /// Whether the token has expired relative to the current wall clock.
    pub fn expired(&self) -> bool {
        self.expired_at(chrono::Utc::now().timestamp())
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub hashed_password: String,
}

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
    pub hashed_password: String,
}

/// Successful login/sign-up response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub login_token: LoginToken,
    pub user: User,
}
