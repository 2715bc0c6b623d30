//! # Push Notification Token Data Transfer Objects
//!
//! The client only registers and removes device push tokens; delivery is
//! entirely server-side.

use crate::dto::auth::LoginToken;
use serde::{Deserialize, Serialize};

/// Whether to register or remove the device token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PushTokenKind {
    Add = 0,
    Remove = 1,
}

impl From<PushTokenKind> for u8 {
    fn from(kind: PushTokenKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for PushTokenKind {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PushTokenKind::Add),
            1 => Ok(PushTokenKind::Remove),
            other => Err(format!("unknown push-token kind: {other}")),
        }
    }
}

/// Request body for `/api/v1/push_token/`. Response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PushTokenRequest {
    pub token: String,
    pub login_token: LoginToken,
    pub kind: PushTokenKind,
}
